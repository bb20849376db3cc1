/// The hour rows of the grid, inclusive on both ends.
pub fn hour_range(start_hour: u8, end_hour: u8) -> Vec<u8> {
    (start_hour..=end_hour).collect()
}

/// Renders an hour as a zero-padded wall-clock label.
pub fn hour_label(hour: u8) -> String {
    format!("{:02}:00", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        assert_eq!(hour_range(8, 10), vec![8, 9, 10]);
        assert_eq!(hour_range(9, 9), vec![9]);
    }

    #[test]
    fn labels_are_zero_padded() {
        assert_eq!(hour_label(8), "08:00");
        assert_eq!(hour_label(13), "13:00");
    }
}
