use std::str::from_utf8;

use account_ledger::{
    Account, LedgerError, ManualClock,
    bin_utils::{ReplayError, Service},
    command::{CommandError, TransactionAction},
};
use chrono::{NaiveDate, TimeDelta};

const TEST_FILE: &str = include_str!("commands.csv");

const EXPECTED_STATEMENT: &str = "date       || Amount || balance\n\
                                  02/01/2020 || -150 || 100\n\
                                  02/01/2020 || -50 || 250\n\
                                  01/01/2020 || 200 || 300\n\
                                  01/01/2020 || 100 || 100\n";

#[test]
fn replay_commands() {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        error_printer: Box::new(|_line, err| errors.push(err)),
    };
    service.run().unwrap();

    assert_eq!(from_utf8(&output).unwrap(), EXPECTED_STATEMENT);

    assert_eq!(errors.len(), 3);
    assert!(matches!(
        errors[0],
        ReplayError::LedgerErr(LedgerError::InsufficientFunds {
            requested: 1000,
            available: 250
        })
    ));
    assert!(matches!(
        errors[1],
        ReplayError::CommandErr(CommandError::AmountRequired {
            action: TransactionAction::Deposit
        })
    ));
    assert!(matches!(
        errors[2],
        ReplayError::LedgerErr(LedgerError::InvalidArgument { amount: 0, .. })
    ));
}

#[test]
fn replay_without_commands() {
    let mut output = Vec::new();
    let service = Service {
        input: "type,timestamp,amount\n".as_bytes(),
        output: &mut output,
        error_printer: Box::new(|line, err| panic!("unexpected error at line {line}: {err}")),
    };
    service.run().unwrap();
    assert_eq!(from_utf8(&output).unwrap(), "No transactions to display\n");
}

#[test]
fn statement_from_account_api() {
    let clock = ManualClock::new(
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    );
    let mut account = Account::new(&clock);
    account.deposit(100).unwrap();
    clock.advance(TimeDelta::hours(1));
    account.deposit(200).unwrap();
    clock.advance(TimeDelta::hours(23));
    account.withdraw(50).unwrap();
    clock.advance(TimeDelta::hours(1));
    account.withdraw(150).unwrap();

    assert_eq!(account.balance(), 100);
    assert_eq!(account.statement().to_string(), EXPECTED_STATEMENT);
    // stdout is not captured here, only check it does not fail
    account.print_statement().unwrap();
}

#[test]
fn malformed_rows_do_not_stop_replay() {
    let input = "type,timestamp,amount\n\
                 deposit,2020-13-01T00:00:00,5\n\
                 deposit,2020-01-01T00:00:00,7\n\
                 deposit,2020-01-02T00:00:00,99999999999999999999\n\
                 withdrawal,2020-01-03T00:00:00,2\n";
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let service = Service {
        input: input.as_bytes(),
        output: &mut output,
        error_printer: Box::new(|line, err| errors.push((line, err))),
    };
    service.run().unwrap();

    assert_eq!(
        from_utf8(&output).unwrap(),
        "date       || Amount || balance\n\
         03/01/2020 || -2 || 5\n\
         01/01/2020 || 7 || 7\n"
    );

    let lines: Vec<_> = errors.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![2, 4]);
    assert!(
        errors
            .iter()
            .all(|(_, err)| matches!(err, ReplayError::ParseErr(_)))
    );
    assert!(errors[0].1.to_string().starts_with("Malformed row:"));
}
