use crate::ast::{Arg, Call};
use crate::pest_parser::{CallGrammar, Rule};
use pest::iterators::Pair;
use pest::Parser;

/// Parse a single call expression
///
/// ```
/// use vecnorm_parser::{parse, Arg};
///
/// let call = parse("norm(x, 3)").unwrap();
/// assert_eq!(call.name, "norm");
/// assert_eq!(call.args[1], Arg::Number(3.0));
/// ```
pub fn parse(source: &str) -> Result<Call, String> {
    let mut pairs = CallGrammar::parse(Rule::program, source).map_err(|e| e.to_string())?;
    let program = pairs.next().ok_or("Empty program")?;
    let call = program
        .into_inner()
        .next()
        .ok_or("Missing call expression")?;

    AstParser::new().build_call(call)
}

/// Builds the call syntax tree from pest pairs
pub struct AstParser;

impl AstParser {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn build_call(&mut self, pair: Pair<Rule>) -> Result<Call, String> {
        let mut inner = pair.into_inner();

        // Grammar: identifier ~ "(" ~ arg ~ ("," ~ arg)* ~ ")"
        let name = inner.next().ok_or("Missing function name")?.as_str().to_string();

        let args = inner
            .map(|arg| self.build_arg(arg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Call { name, args })
    }

    fn build_arg(&mut self, pair: Pair<Rule>) -> Result<Arg, String> {
        let inner = pair.into_inner().next().ok_or("Empty argument")?;

        match inner.as_rule() {
            Rule::number => Ok(Arg::Number(self.build_number(inner)?)),
            Rule::vector => {
                let elements = inner
                    .into_inner()
                    .map(|n| self.build_number(n))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Arg::Vector(elements))
            }
            Rule::identifier => Ok(Arg::Identifier(inner.as_str().to_string())),
            _ => Err(format!("Unexpected argument rule: {:?}", inner.as_rule())),
        }
    }

    fn build_number(&mut self, pair: Pair<Rule>) -> Result<f64, String> {
        // f64's FromStr already accepts NaN, inf and Infinity with a sign
        pair.as_str()
            .parse::<f64>()
            .map_err(|e| format!("Failed to parse number '{}': {}", pair.as_str(), e))
    }
}

impl Default for AstParser {
    fn default() -> Self {
        Self::new()
    }
}
