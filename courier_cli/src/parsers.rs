use courier_optimizer::{balancer::TieBreak, problem::order::Order};

/// Parses `destination:weight`, e.g. `Mumbai:4.5`.
pub fn parse_order(input: &str) -> Result<Order, String> {
    let Some((destination, weight)) = input.rsplit_once(':') else {
        return Err(format!("Invalid order {input:?}, expected destination:weight"));
    };

    let destination = destination.trim();
    if destination.is_empty() {
        return Err(format!("Invalid order {input:?}, missing destination"));
    }

    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid weight in order {input:?}"))?;

    Ok(Order::new(destination, weight))
}

pub fn parse_tie_break(input: &str) -> Result<TieBreak, String> {
    match input.trim() {
        "lowest-index" => Ok(TieBreak::LowestIndex),
        "proximity" => Ok(TieBreak::Proximity),
        _ => Err(String::from(
            "Invalid tie-break, expected lowest-index or proximity",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("Mumbai:4.5"), Ok(Order::new("Mumbai", 4.5)));
        assert_eq!(parse_order(" New Delhi : 3 "), Ok(Order::new("New Delhi", 3.0)));
    }

    #[test]
    fn test_parse_order_errors() {
        assert!(parse_order("Mumbai").is_err());
        assert!(parse_order(":4").is_err());
        assert!(parse_order("Mumbai:heavy").is_err());
    }

    #[test]
    fn test_parse_tie_break() {
        assert_eq!(parse_tie_break("lowest-index"), Ok(TieBreak::LowestIndex));
        assert_eq!(parse_tie_break("proximity"), Ok(TieBreak::Proximity));
        assert!(parse_tie_break("random").is_err());
    }
}
