use anyhow::{Context, Result, bail};
use inkwell_core::blog::Category;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use strum::IntoEnumIterator;

/// Parses a category argument. Blank and "all" mean no category.
pub fn parse_category(raw: Option<&str>) -> Result<Option<Category>> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    match raw.parse::<Category>() {
        Ok(category) => Ok(Some(category)),
        Err(_) => {
            let valid: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
            bail!(
                "Unknown category '{}'. Expected one of: {}, all",
                raw,
                valid.join(", ")
            )
        }
    }
}

/// Reads a password without echoing it.
pub fn prompt_password(message: &str) -> Result<String> {
    rpassword::prompt_password(format!("{} ", message)).context("Failed to read password")
}

/// Asks a y/N question. Anything but an explicit yes, including Ctrl-C and
/// end of input, declines.
pub fn confirm(message: &str) -> Result<bool> {
    let mut rl = DefaultEditor::new().context("Failed to open terminal")?;
    match rl.readline(&format!("{} [y/N] ", message)) {
        Ok(answer) => Ok(is_yes(&answer)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(false),
        Err(e) => Err(e).context("Failed to read answer"),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(None).unwrap(), None);
        assert_eq!(parse_category(Some("all")).unwrap(), None);
        assert_eq!(parse_category(Some(" ")).unwrap(), None);
        assert_eq!(parse_category(Some("tech")).unwrap(), Some(Category::Tech));
        assert_eq!(
            parse_category(Some("Finance")).unwrap(),
            Some(Category::Finance)
        );
        let err = parse_category(Some("Cooking")).unwrap_err();
        assert!(err.to_string().contains("Career, Travel, Finance, Tech"));
    }

    #[test]
    fn test_only_explicit_yes_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES \n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
