use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkExperience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperience::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(WorkExperience::Company).text().not_null())
                    .col(ColumnDef::new(WorkExperience::Role).text().not_null())
                    // Free text, e.g. "2021 – Present"
                    .col(ColumnDef::new(WorkExperience::Duration).text().not_null())
                    .col(
                        ColumnDef::new(WorkExperience::Contributions)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_work_experience_sort_order
                ON work_experience (sort_order ASC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_work_experience_sort_order;")
            .await?;

        manager
            .drop_table(Table::drop().table(WorkExperience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkExperience {
    Table,
    Id,
    Company,
    Role,
    Duration,
    Contributions,
    SortOrder,
    CreatedAt,
}
