pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_updated_at_function;
mod m20260301_000010_create_table_abouts;
mod m20260301_000020_create_table_contacts;
mod m20260301_000030_create_table_projects;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_updated_at_function::Migration),
            Box::new(m20260301_000010_create_table_abouts::Migration),
            Box::new(m20260301_000020_create_table_contacts::Migration),
            Box::new(m20260301_000030_create_table_projects::Migration),
        ]
    }
}
