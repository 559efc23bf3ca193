//! Table definitions.
//!
//! Each table is spelled out column by column instead of being derived from
//! the entity structs, so defaults and constraints live in one readable place.
//! Statements use `IF NOT EXISTS`; an existing table is never altered.

use sea_orm::sea_query::{ColumnDef, Expr, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbErr};

use crate::entities::{post, project, skill, snippet};

pub fn projects() -> TableCreateStatement {
    use project::Column;

    Table::create()
        .table(project::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Column::Title).string().not_null())
        .col(ColumnDef::new(Column::Description).text().null())
        .col(ColumnDef::new(Column::TechStack).string().null())
        .to_owned()
}

pub fn code_snippets() -> TableCreateStatement {
    use snippet::Column;

    Table::create()
        .table(snippet::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Column::Title).string().not_null())
        .col(ColumnDef::new(Column::Description).text().null())
        .col(ColumnDef::new(Column::HtmlCode).text().null())
        .col(ColumnDef::new(Column::CssCode).text().null())
        .col(ColumnDef::new(Column::JsCode).text().null())
        .col(
            ColumnDef::new(Column::IsPublished)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Column::CreatedAt)
                .date_time()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn posts() -> TableCreateStatement {
    use post::Column;

    Table::create()
        .table(post::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Column::Title).string().not_null())
        .col(ColumnDef::new(Column::Content).text().null())
        .col(ColumnDef::new(Column::CoverImage).string().null())
        .col(
            ColumnDef::new(Column::IsPublished)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Column::CreatedAt)
                .date_time()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn skills() -> TableCreateStatement {
    use skill::Column;

    Table::create()
        .table(skill::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Column::Category)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Column::Score).integer().not_null())
        .col(
            ColumnDef::new(Column::SkillOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

/// Creates every table that does not exist yet.
pub async fn create_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for stmt in [projects(), code_snippets(), posts(), skills()] {
        db.execute(backend.build(&stmt)).await?;
    }
    Ok(())
}
