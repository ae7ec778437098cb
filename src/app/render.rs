use crate::domain::model::{Outcome, Snapshot};

/// Groups digits in threes: `1234567` -> `1,234,567`.
pub fn format_product(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn render(snapshot: &Snapshot) -> String {
    let mut lines = vec![
        format!("First number:  {}", snapshot.first),
        format!("Second number: {}", snapshot.second),
    ];

    if snapshot.is_loading() {
        lines.push("Calculating...".to_string());
        return lines.join("\n");
    }

    match &snapshot.outcome {
        Outcome::Idle => lines.push("Enter two numbers to calculate their product".to_string()),
        Outcome::Success(result) => {
            lines.push(format!("Operation: {}", result.operation));
            lines.push(format!("Result:    {}", format_product(result.result)));
            lines.push(result.message.clone());
        }
        Outcome::Failure(error) => lines.push(format!("Error: {}", error.message())),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CalculationError, CalculationResult, RequestState};

    #[test]
    fn test_format_product() {
        assert_eq!(format_product(0), "0");
        assert_eq!(format_product(42), "42");
        assert_eq!(format_product(1000), "1,000");
        assert_eq!(format_product(-1234567), "-1,234,567");
        assert_eq!(format_product(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_render_success() {
        let snapshot = Snapshot {
            first: "6".to_string(),
            second: "7".to_string(),
            request_state: RequestState::Idle,
            outcome: Outcome::Success(CalculationResult {
                result: 42,
                message: "6 times 7 equals 42".to_string(),
                operation: "6 × 7".to_string(),
            }),
        };

        let text = render(&snapshot);
        assert!(text.contains("Operation: 6 × 7"));
        assert!(text.contains("Result:    42"));
        assert!(text.ends_with("6 times 7 equals 42"));
    }

    #[test]
    fn test_render_loading_hides_outcome() {
        let snapshot = Snapshot {
            request_state: RequestState::Loading,
            outcome: Outcome::Failure(CalculationError("old".to_string())),
            ..Snapshot::default()
        };

        let text = render(&snapshot);
        assert!(text.contains("Calculating..."));
        assert!(!text.contains("old"));
    }

    #[test]
    fn test_render_error() {
        let snapshot = Snapshot {
            outcome: Outcome::Failure(CalculationError("Please enter both numbers".to_string())),
            ..Snapshot::default()
        };

        assert!(render(&snapshot).ends_with("Error: Please enter both numbers"));
    }
}
