//! Text model: whitespace-boundary tokens and measurement normalization

mod normalize;
mod token;

pub use normalize::{collapse_spaces, NormalizedChunk};
pub use token::{tokenize, Token, TokenKind, Tokens, SINGLE_SPACE};
