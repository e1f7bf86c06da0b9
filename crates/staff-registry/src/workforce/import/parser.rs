use super::outcome::LineRejection;
use crate::workforce::catalog::Position;
use crate::workforce::domain::Employee;

pub(crate) const EXPECTED_COLUMNS: usize = 6;

/// Parse one data line of the form
/// `firstName,lastName,email,organization,position,compensation`.
///
/// Commas always separate fields; quoting is not supported.
pub(crate) fn parse_line(line: &str) -> Result<Employee, LineRejection> {
    let raw: Vec<&str> = line.split(',').collect();
    let fields: [&str; EXPECTED_COLUMNS] = raw.as_slice().try_into().map_err(|_| {
        LineRejection::ColumnCount {
            expected: EXPECTED_COLUMNS,
            found: raw.len(),
        }
    })?;
    let fields = fields.map(str::trim);

    if fields.iter().any(|field| field.is_empty()) {
        return Err(LineRejection::BlankField);
    }

    let [first_name, last_name, email, organization, position, compensation] = fields;
    let position: Position = position.parse()?;
    let compensation = parse_compensation(compensation)?;

    Ok(Employee::new(
        first_name,
        last_name,
        email,
        organization,
        position,
        compensation,
    )?)
}

fn parse_compensation(value: &str) -> Result<f64, LineRejection> {
    let parsed = value
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| LineRejection::InvalidCompensation(value.to_string()))?;

    if parsed <= 0.0 {
        return Err(LineRejection::NonPositiveCompensation(value.to_string()));
    }

    Ok(parsed)
}
