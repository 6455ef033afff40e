use crate::domain::error::TranslateError;
use std::io::Read;

/// Resolve the text to translate.
///
/// With an interactive stdin the arguments are joined by spaces, and `None`
/// means there is nothing to translate (the caller shows usage). With piped
/// stdin its whole content is used and the arguments are ignored.
pub fn read_input<R: Read>(
    args: &[String],
    stdin_is_terminal: bool,
    mut stdin: R,
) -> Result<Option<String>, TranslateError> {
    if stdin_is_terminal {
        if args.is_empty() {
            return Ok(None);
        }
        return Ok(Some(args.join(" ")));
    }

    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
