use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::path::BitPath;
use crate::symbol::Symbol;

/// Concatenate the code of every input symbol, in input order.
///
/// Fails on the first symbol that has no code in `table`.
pub fn encode<S, I>(input: I, table: &CodeTable<S>) -> Result<BitPath>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let input = input.into_iter();
    let mut path = BitPath::with_capacity(input.size_hint().0);
    for symbol in input {
        let Some(code) = table.get(&symbol) else {
            return Err(HuffmanError::UnknownSymbol {
                symbol: format!("{symbol:?}"),
            });
        };
        path.extend_from(code);
    }
    log::debug!("encoded into {} path bits", path.len());
    Ok(path)
}
