use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar/ddl.pest"]
pub struct DdlGrammar;
