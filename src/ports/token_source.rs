use crate::domain::CacheToken;

/// Port for minting cache-busting tokens.
pub trait TokenSource {
    /// Return a token never handed out before.
    fn next_token(&self) -> CacheToken;
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn next_token(&self) -> CacheToken {
        (**self).next_token()
    }
}
