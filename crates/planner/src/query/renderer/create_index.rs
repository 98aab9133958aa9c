use crate::{
    error::{PlannerError, PlannerResult},
    query::{
        ast::create_index::CreateFullTextIndex,
        renderer::{
            Render, Renderer,
            create_table::{render_columns, render_parser, render_table_ref},
        },
    },
};
use tracing::debug;

impl Render for CreateFullTextIndex {
    fn render(&self, r: &mut Renderer) -> PlannerResult<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidTable("index name is empty".to_string()));
        }
        if self.columns.is_empty() {
            return Err(PlannerError::InvalidTable(format!(
                "full-text index `{}` has no columns",
                self.name
            )));
        }

        r.sql.push_str("CREATE FULLTEXT INDEX ");
        r.push_identifier(&self.name);
        r.sql.push_str(" ON ");
        render_table_ref(&self.table, r);
        r.sql.push(' ');
        render_columns(&self.columns, r)?;
        render_parser(self.parser.as_deref(), r)?;
        r.sql.push(';');

        debug!(index = %self.name, table = %self.table.name, "Rendered CREATE FULLTEXT INDEX");
        Ok(())
    }
}
