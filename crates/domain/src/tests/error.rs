// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Day, DomainError};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("Room name cannot be empty"));
    assert_eq!(format!("{err}"), "Invalid name: Room name cannot be empty");

    let err: DomainError = DomainError::InvalidShift(String::from("x"));
    assert_eq!(format!("{err}"), "Invalid shift: 'x'");

    let err: DomainError = DomainError::InvalidStatus(String::from("done"));
    assert_eq!(format!("{err}"), "Invalid room status: 'done'");

    let err: DomainError = DomainError::UnknownParticipant {
        name: String::from("Zed"),
    };
    assert_eq!(format!("{err}"), "'Zed' is not a participant of this room");

    let err: DomainError = DomainError::InvalidDateRange {
        start: Day::parse("2024-03-02").unwrap(),
        end: Day::parse("2024-03-01").unwrap(),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date range: start 2024-03-02 is after end 2024-03-01"
    );
}
