pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[cold]
pub fn kind_mismatch<T>(
    context: &str,
    index: usize,
    expected: &'static str,
    found: &'static str,
) -> Result<T> {
    Err(crate::error::Error::kind_mismatch(
        context, index, expected, found,
    ))
}
