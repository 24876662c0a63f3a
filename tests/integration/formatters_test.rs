use omnifetch::ui::{format_gib_usage, format_percent, format_uptime};

#[test]
fn test_gib_usage() {
    assert_eq!(format_gib_usage(1_073_741_824, 2_147_483_648), "1.00 GiB / 2.00 GiB");
}

#[test]
fn test_gib_usage_rounds_to_two_places() {
    // 1.5 GiB used of 7.75 GiB
    assert_eq!(
        format_gib_usage(1_610_612_736, 8_321_499_136),
        "1.50 GiB / 7.75 GiB"
    );
}

#[test]
fn test_uptime() {
    assert_eq!(format_uptime(90_061), "1 days, 1 hours, 1 mins");
    assert_eq!(format_uptime(0), "0 days, 0 hours, 0 mins");
}

#[test]
fn test_percent() {
    assert_eq!(format_percent(99.999), "100.00%");
    assert_eq!(format_percent(3.14159), "3.14%");
}
