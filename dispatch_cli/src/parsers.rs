use dispatch_engine::problem::minutes::Minutes;
use jiff::SpanRelativeTo;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

/// A work-time ceiling, truncated to whole minutes.
pub fn parse_minutes(input: &str) -> Result<Minutes, String> {
    let duration = parse_duration(input)?;

    if duration.is_negative() {
        return Err(String::from("Duration must not be negative"));
    }

    u32::try_from(duration.as_mins())
        .map(Minutes::new)
        .map_err(|_| String::from("Duration is too long"))
}
