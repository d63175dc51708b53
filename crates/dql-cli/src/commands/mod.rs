pub mod ast;
pub mod check;
pub mod kinds;
pub mod source_loader;


use dql_lib::Query;

/// Parser limits taken from `--exec-fuel` and `--recursion-fuel`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fuel {
    pub exec: Option<u32>,
    pub recursion: Option<u32>,
}

impl Fuel {
    pub fn parse<'q>(self, text: &'q str) -> dql_lib::Result<Query<'q>> {
        Query::new(text)
            .with_exec_fuel(self.exec)
            .with_recursion_fuel(self.recursion)
            .exec()
    }
}
