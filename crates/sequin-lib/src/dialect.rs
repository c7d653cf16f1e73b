//! The built-in SQL dialect and the compile-parse facade.


use crate::analysis::ParseTable;
use crate::format::{FormatOptions, format_with};
use crate::grammar::Grammar;
use crate::syntax::{DEFAULT_FUEL, Machine, ParseTree};
use crate::Result;

/// Grammar text for the built-in SQL dialect.
///
/// Keywords are spelled upper-case and match input case-insensitively;
/// `symbol`, `number` and `string` match whole token categories. The
/// alternatives of every production keep disjoint lookaheads, which the
/// table builder verifies on every compile.
pub const SQL_GRAMMAR: &str = r#"
# Entry point
Query -> [Stmt] [Terminator]
Terminator -> ; | e

# Statements, optionally introduced by common table expressions
Stmt -> WITH [Cte] [Ctes] [SelectStmt] | [SelectStmt]
Cte -> [Identifier] AS [SubQuery]
Ctes -> , [Cte] [Ctes] | e
SubQuery -> ( [SelectStmt] )

SelectStmt -> SELECT [SelectList] [FromClause] [WhereClause] [GroupByClause] [HavingClause] [OrderByClause] [LimitClause]

SelectList -> * | [SelectItem] [SelectItems]
SelectItems -> , [SelectItem] [SelectItems] | e
SelectItem -> [Value] [Alias]
Alias -> AS [Identifier] | e

# FROM with joins and subqueries
FromClause -> FROM [TableRef] [TableRefs] | e
TableRefs -> , [TableRef] [TableRefs] | [Join] [TableRefs] | e
TableRef -> [Table] [TableAlias] | [SubQuery] [TableAlias]
TableAlias -> [Identifier] | e
Table -> [Identifier] [TablePath]
TablePath -> . [Identifier] [TablePath] | e
Join -> INNER JOIN [TableRef] [JoinOn] | LEFT JOIN [TableRef] [JoinOn] | CROSS JOIN [TableRef]
JoinOn -> ON [BoolExpr] | e

# Filtering, grouping, ordering
WhereClause -> WHERE [BoolExpr] | e
GroupByClause -> GROUP BY [Column] [ColumnItems] | e
ColumnItems -> , [Column] [ColumnItems] | e
HavingClause -> HAVING [BoolExpr] | e
OrderByClause -> ORDER BY [OrderItem] [OrderItems] | e
OrderItems -> , [OrderItem] [OrderItems] | e
OrderItem -> [Value] [OrderDir]
OrderDir -> ASC | DESC | e
LimitClause -> LIMIT [Number] | e

# Conditions: OR over AND over unary terms
BoolExpr -> [AndExpr] [OrTail]
OrTail -> OR [AndExpr] [OrTail] | e
AndExpr -> [BoolTerm] [AndTail]
AndTail -> AND [BoolTerm] [AndTail] | e
BoolTerm -> NOT [BoolTerm] | ( [BoolExpr] ) | [Value] [Comparison]
Comparison -> [CompareOp] [Value] | IN ( [ValueList] ) | e
CompareOp -> = | < [LtTail] | > [GtTail]
LtTail -> = | > | e
GtTail -> = | e

# Values, columns, function calls
ValueList -> [Value] [ValueItems]
ValueItems -> , [Value] [ValueItems] | e
Value -> [Number] | [String] | [Boolean] | NULL | [Column]
Column -> [Identifier] [ColumnRef]
ColumnRef -> . [Identifier] [ColumnRef] | ( [CallArgs] ) | e
CallArgs -> * | [ValueList] | e
Identifier -> symbol
Number -> number
String -> string
Boolean -> TRUE | FALSE
"#;

/// A compiled grammar plus its parsing table, ready to parse input.
#[derive(Debug, Clone)]
pub struct Dialect {
    grammar: Grammar,
    table: ParseTable,
    fuel: u32,
}

impl Dialect {
    /// Compiles grammar text and validates the LL(1) property.
    pub fn compile(text: &str) -> Result<Self> {
        let grammar = Grammar::compile(text)?;
        let table = ParseTable::build(&grammar)?;
        Ok(Self {
            grammar,
            table,
            fuel: DEFAULT_FUEL,
        })
    }

    /// The built-in SQL dialect.
    pub fn sql() -> Self {
        Self::compile(SQL_GRAMMAR).expect("the built-in grammar is LL(1)")
    }

    /// Overrides the parser's step budget.
    pub fn with_fuel(mut self, fuel: u32) -> Self {
        self.fuel = fuel;
        self
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn table(&self) -> &ParseTable {
        &self.table
    }

    /// Parses input text into a concrete parse tree.
    pub fn parse(&self, input: &str) -> Result<ParseTree> {
        Machine::new(&self.grammar, &self.table)
            .with_fuel(self.fuel)
            .parse(input)
    }
}

/// Parses with the built-in dialect and formats with default options: the
/// host-facing one-call entry point.
pub fn reformat(input: &str) -> Result<String> {
    let tree = Dialect::sql().parse(input)?;
    Ok(format_with(&tree, &FormatOptions::default()))
}
