pub mod check;
pub mod generate;
pub mod wordlist;

pub use generate::GenerateArgs;
pub use wordlist::Command as WordlistCommand;
