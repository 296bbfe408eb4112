use std::fmt::Display;

use cq_core::CodeQuestError;

fn map_error(code: &'static str, error: impl Display) -> CodeQuestError {
    CodeQuestError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: CodeQuestError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).expect("string json")
    );
    1
}

pub(crate) fn map_cli_script_read(error: std::io::Error) -> CodeQuestError {
    map_error("CLI_SCRIPT_READ", error)
}

pub(crate) fn map_cli_state_read(error: std::io::Error) -> CodeQuestError {
    map_error("CLI_STATE_READ", error)
}

pub(crate) fn map_cli_state_write(error: std::io::Error) -> CodeQuestError {
    map_error("CLI_STATE_WRITE", error)
}

pub(crate) fn map_cli_state_invalid(error: serde_json::Error) -> CodeQuestError {
    map_error("CLI_STATE_INVALID", error)
}

pub(crate) fn map_cli_date_invalid(error: chrono::ParseError) -> CodeQuestError {
    map_error("CLI_DATE_INVALID", error)
}

#[cfg(test)]
mod error_map_tests {
    use super::*;

    #[test]
    fn emit_error_returns_non_zero_exit_code() {
        let code = emit_error(CodeQuestError::new("ERR", "failed"));
        assert_eq!(code, 1);
    }

    #[test]
    fn mapping_helpers_keep_error_codes() {
        assert_eq!(
            map_cli_script_read(std::io::Error::other("read")).code,
            "CLI_SCRIPT_READ"
        );
        assert_eq!(
            map_cli_state_read(std::io::Error::other("read")).code,
            "CLI_STATE_READ"
        );
        assert_eq!(
            map_cli_state_write(std::io::Error::other("write")).code,
            "CLI_STATE_WRITE"
        );
        let invalid = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        assert_eq!(map_cli_state_invalid(invalid).code, "CLI_STATE_INVALID");
        let bad_date = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d")
            .expect_err("invalid date");
        assert_eq!(map_cli_date_invalid(bad_date).code, "CLI_DATE_INVALID");
    }
}
