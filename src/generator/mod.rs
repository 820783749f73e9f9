/// Renders canonical values as SQL literal tokens.
pub mod literal;
/// Serializes rows into parenthesized SQL value lists.
pub mod row;
/// Assembles complete INSERT statements.
pub mod statement;
