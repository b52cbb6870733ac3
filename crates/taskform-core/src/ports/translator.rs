//! Translator port - ローカライズの抽象化

/// Translator resolves a localization key to a user-facing string.
///
/// Lookup is assumed to always succeed: an unknown key resolves to some
/// string (implementations usually return the key itself).
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Identity translation, used when no catalog is configured.
impl Translator for () {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, key: &str) -> String {
        (**self).translate(key)
    }
}
