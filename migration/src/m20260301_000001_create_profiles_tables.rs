use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profiles table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::Description).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Profiles::ActiveFlag)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Profiles::ActiveFlag).gte(0)),
                    )
                    .col(ColumnDef::new(Profiles::LastNames).string_len(60).not_null())
                    .col(ColumnDef::new(Profiles::FirstNames).string_len(60).not_null())
                    .col(ColumnDef::new(Profiles::Nationality).string_len(20).not_null())
                    .col(ColumnDef::new(Profiles::Birthplace).string_len(60).not_null())
                    .col(ColumnDef::new(Profiles::BirthDate).date().not_null())
                    .col(
                        ColumnDef::new(Profiles::NationalId)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::Sex).string_len(1).not_null())
                    .col(ColumnDef::new(Profiles::MaritalStatus).string_len(50).not_null())
                    .col(ColumnDef::new(Profiles::DriverLicense).string_len(6).not_null())
                    .col(ColumnDef::new(Profiles::LandlinePhone).string_len(15).not_null())
                    .col(ColumnDef::new(Profiles::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Profiles::WorkAddress).string_len(50).not_null())
                    .col(ColumnDef::new(Profiles::HomeAddress).string_len(50).not_null())
                    .col(ColumnDef::new(Profiles::Website).string_len(60).not_null())
                    .col(ColumnDef::new(Profiles::PhotoUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create section_visibilities table (one row per profile)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SectionVisibilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SectionVisibilities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SectionVisibilities::ProfileId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(flag(SectionVisibilities::ShowWorkExperience))
                    .col(flag(SectionVisibilities::ShowCourses))
                    .col(flag(SectionVisibilities::ShowRecognitions))
                    .col(flag(SectionVisibilities::ShowAcademicProducts))
                    .col(flag(SectionVisibilities::ShowWorkProducts))
                    .col(flag(SectionVisibilities::ShowGarageSale))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_visibilities_profile_id")
                            .from(SectionVisibilities::Table, SectionVisibilities::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SectionVisibilities::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

fn flag(column: SectionVisibilities) -> ColumnDef {
    ColumnDef::new(column)
        .boolean()
        .not_null()
        .default(true)
        .to_owned()
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Description,
    ActiveFlag,
    LastNames,
    FirstNames,
    Nationality,
    Birthplace,
    BirthDate,
    NationalId,
    Sex,
    MaritalStatus,
    DriverLicense,
    LandlinePhone,
    Phone,
    WorkAddress,
    HomeAddress,
    Website,
    PhotoUrl,
}

#[derive(DeriveIden)]
enum SectionVisibilities {
    Table,
    Id,
    ProfileId,
    ShowWorkExperience,
    ShowCourses,
    ShowRecognitions,
    ShowAcademicProducts,
    ShowWorkProducts,
    ShowGarageSale,
}
