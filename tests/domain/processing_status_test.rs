use vitrine::domain::ProcessingStatus;

#[test]
fn given_every_status_when_parsed_from_its_name_then_round_trips() {
    for status in [
        ProcessingStatus::Pending,
        ProcessingStatus::Processing,
        ProcessingStatus::Completed,
        ProcessingStatus::Failed,
    ] {
        assert_eq!(status.as_str().parse::<ProcessingStatus>(), Ok(status));
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    assert!("DONE".parse::<ProcessingStatus>().is_err());
    assert!("completed".parse::<ProcessingStatus>().is_err());
}

#[test]
fn given_statuses_when_checking_terminal_then_only_completed_and_failed_are_terminal() {
    assert!(!ProcessingStatus::Pending.is_terminal());
    assert!(!ProcessingStatus::Processing.is_terminal());
    assert!(ProcessingStatus::Completed.is_terminal());
    assert!(ProcessingStatus::Failed.is_terminal());
}
