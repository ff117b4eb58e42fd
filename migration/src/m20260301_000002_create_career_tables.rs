use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // work_experiences
        // =====================================================
        manager
            .create_table(
                career_table(WorkExperiences::Table, "work_experiences")
                    .col(ColumnDef::new(WorkExperiences::Position).string_len(100).not_null())
                    .col(ColumnDef::new(WorkExperiences::CompanyName).string_len(50).not_null())
                    .col(
                        ColumnDef::new(WorkExperiences::CompanyLocation)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperiences::CompanyEmail).string_len(100))
                    .col(ColumnDef::new(WorkExperiences::CompanyWebsite).string_len(100))
                    .col(ColumnDef::new(WorkExperiences::ContactName).string_len(100))
                    .col(ColumnDef::new(WorkExperiences::ContactPhone).string_len(60))
                    .col(ColumnDef::new(WorkExperiences::StartDate).date().not_null())
                    .col(ColumnDef::new(WorkExperiences::EndDate).date())
                    .col(
                        ColumnDef::new(WorkExperiences::Responsibilities)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperiences::CertificateUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // recognitions
        // =====================================================
        manager
            .create_table(
                career_table(Recognitions::Table, "recognitions")
                    .col(ColumnDef::new(Recognitions::Kind).string_len(20).not_null())
                    .col(ColumnDef::new(Recognitions::AwardedOn).date().not_null())
                    .col(ColumnDef::new(Recognitions::Description).string_len(100).not_null())
                    .col(ColumnDef::new(Recognitions::Sponsor).string_len(100).not_null())
                    .col(ColumnDef::new(Recognitions::ContactName).string_len(100))
                    .col(ColumnDef::new(Recognitions::ContactPhone).string_len(60))
                    .col(ColumnDef::new(Recognitions::CertificateUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // completed_courses
        // =====================================================
        manager
            .create_table(
                career_table(CompletedCourses::Table, "completed_courses")
                    .col(ColumnDef::new(CompletedCourses::Name).string_len(100).not_null())
                    .col(ColumnDef::new(CompletedCourses::StartDate).date().not_null())
                    .col(ColumnDef::new(CompletedCourses::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(CompletedCourses::TotalHours)
                            .integer()
                            .not_null()
                            .check(Expr::col(CompletedCourses::TotalHours).gte(0)),
                    )
                    .col(
                        ColumnDef::new(CompletedCourses::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompletedCourses::Sponsor).string_len(100).not_null())
                    .col(ColumnDef::new(CompletedCourses::ContactName).string_len(100))
                    .col(ColumnDef::new(CompletedCourses::ContactPhone).string_len(60))
                    .col(ColumnDef::new(CompletedCourses::SponsorEmail).string_len(60))
                    .col(ColumnDef::new(CompletedCourses::CertificateUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // academic_products
        // =====================================================
        manager
            .create_table(
                career_table(AcademicProducts::Table, "academic_products")
                    .col(
                        ColumnDef::new(AcademicProducts::ResourceName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicProducts::Classifier)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicProducts::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // work_products
        // =====================================================
        manager
            .create_table(
                career_table(WorkProducts::Table, "work_products")
                    .col(ColumnDef::new(WorkProducts::ProductName).string_len(100).not_null())
                    .col(ColumnDef::new(WorkProducts::ProducedOn).date().not_null())
                    .col(ColumnDef::new(WorkProducts::Description).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // garage_sale_items
        // =====================================================
        manager
            .create_table(
                career_table(GarageSaleItems::Table, "garage_sale_items")
                    .col(
                        ColumnDef::new(GarageSaleItems::ProductName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(GarageSaleItems::Condition).string_len(10).not_null())
                    .col(
                        ColumnDef::new(GarageSaleItems::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GarageSaleItems::Value)
                            .decimal_len(10, 2)
                            .not_null()
                            .check(Expr::col(GarageSaleItems::Value).gte(0)),
                    )
                    .col(ColumnDef::new(GarageSaleItems::PublishedOn).date().not_null())
                    .col(
                        ColumnDef::new(GarageSaleItems::Available)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(GarageSaleItems::ImageUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes: public CV reads filter every table by profile
        // =====================================================
        for table in CAREER_TABLES {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "CREATE INDEX IF NOT EXISTS idx_{table}_profile_id ON {table} (profile_id);"
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in CAREER_TABLES {
            manager
                .get_connection()
                .execute_unprepared(&format!("DROP TABLE IF EXISTS {table};"))
                .await?;
        }

        Ok(())
    }
}

const CAREER_TABLES: [&str; 6] = [
    "work_experiences",
    "recognitions",
    "completed_courses",
    "academic_products",
    "work_products",
    "garage_sale_items",
];

/// Id, owning profile (cascading) and the public visibility flag shared by
/// every career table.
fn career_table<T>(table: T, name: &str) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Career::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Career::ProfileId).integer().not_null())
        .col(
            ColumnDef::new(Career::Visible)
                .boolean()
                .not_null()
                .default(true),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_profile_id"))
                .from(table, Career::ProfileId)
                .to(Profiles::Table, Profiles::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Career {
    Id,
    ProfileId,
    Visible,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}

#[derive(DeriveIden, Clone, Copy)]
enum WorkExperiences {
    Table,
    Position,
    CompanyName,
    CompanyLocation,
    CompanyEmail,
    CompanyWebsite,
    ContactName,
    ContactPhone,
    StartDate,
    EndDate,
    Responsibilities,
    CertificateUrl,
}

#[derive(DeriveIden, Clone, Copy)]
enum Recognitions {
    Table,
    Kind,
    AwardedOn,
    Description,
    Sponsor,
    ContactName,
    ContactPhone,
    CertificateUrl,
}

#[derive(DeriveIden, Clone, Copy)]
enum CompletedCourses {
    Table,
    Name,
    StartDate,
    EndDate,
    TotalHours,
    Description,
    Sponsor,
    ContactName,
    ContactPhone,
    SponsorEmail,
    CertificateUrl,
}

#[derive(DeriveIden, Clone, Copy)]
enum AcademicProducts {
    Table,
    ResourceName,
    Classifier,
    Description,
}

#[derive(DeriveIden, Clone, Copy)]
enum WorkProducts {
    Table,
    ProductName,
    ProducedOn,
    Description,
}

#[derive(DeriveIden, Clone, Copy)]
enum GarageSaleItems {
    Table,
    ProductName,
    Condition,
    Description,
    Value,
    PublishedOn,
    Available,
    ImageUrl,
}
