use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create abouts table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Abouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Abouts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Abouts::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Abouts::Description).text().not_null())
                    .col(ColumnDef::new(Abouts::Avatar).text())
                    .col(
                        ColumnDef::new(Abouts::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // Embedded collections live next to the profile
                    .col(
                        ColumnDef::new(Abouts::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Abouts::Education)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Abouts::Experience)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Abouts::SocialLinks).json_binary())
                    .col(
                        ColumnDef::new(Abouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Abouts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // At most one active profile. set-active deactivates the previous
        // profile before activating the target inside one transaction.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_abouts_single_active
                ON abouts (active)
                WHERE active;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_abouts_created_at
                ON abouts (created_at DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_abouts_updated_at
                BEFORE UPDATE ON abouts
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_abouts_updated_at ON abouts;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_abouts_single_active;
                DROP INDEX IF EXISTS idx_abouts_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Abouts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Abouts {
    Table,
    Id,
    Title,
    Description,
    Avatar,
    Active,
    Skills,
    Education,
    Experience,
    SocialLinks,
    CreatedAt,
    UpdatedAt,
}
