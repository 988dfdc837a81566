use rpasuite::strength::*;

#[test]
fn test_alphabet_size_per_class() {
    assert_eq!(alphabet_size("abc"), 26);
    assert_eq!(alphabet_size("ABC"), 26);
    assert_eq!(alphabet_size("123"), 10);
    assert_eq!(alphabet_size("!?."), 32);
    assert_eq!(alphabet_size("aA"), 52);
    assert_eq!(alphabet_size("aA1"), 62);
    assert_eq!(alphabet_size("aA1!"), 94);
}

#[test]
fn test_alphabet_size_unrecognized_characters() {
    // 空格和汉字不属于任何字符类
    assert_eq!(alphabet_size(""), 0);
    assert_eq!(alphabet_size("   "), 0);
    assert_eq!(alphabet_size("中文密码"), 0);
}

#[test]
fn test_estimate_empty_password_unavailable() {
    let estimate = estimate_crack_time("");
    assert_eq!(estimate.rating, StrengthRating::Unavailable);
    assert_eq!(estimate.seconds_to_crack, None);
    assert_eq!(estimate.display, "Analysis unavailable.");
}

#[test]
fn test_estimate_unrecognized_password_unavailable() {
    let estimate = estimate_crack_time("   ");
    assert_eq!(estimate.rating, StrengthRating::Unavailable);
    assert_eq!(estimate.seconds_to_crack, None);
}

#[test]
fn test_estimate_short_lowercase_very_weak() {
    // 26^6 / 10^10 ≈ 0.031秒
    let estimate = estimate_crack_time("aaaaaa");
    assert_eq!(estimate.rating, StrengthRating::VeryWeak);
    assert_eq!(estimate.display, "Very Weak (< 1 min)");
    let seconds = estimate.seconds_to_crack.unwrap();
    assert!(seconds > 0.030 && seconds < 0.032);
}

#[test]
fn test_estimate_digits_weak() {
    // 10^12 / 10^10 = 100秒
    let estimate = estimate_crack_time("123456789012");
    assert_eq!(estimate.rating, StrengthRating::Weak);
    assert_eq!(estimate.display, "Weak (~1.7 mins)");
}

#[test]
fn test_estimate_lowercase_moderate() {
    // 26^10 / 10^10 ≈ 14117秒 ≈ 3.9小时
    let estimate = estimate_crack_time("abcdefghij");
    assert_eq!(estimate.rating, StrengthRating::Moderate);
    assert_eq!(estimate.display, "Moderate (~3.9 hrs)");
}

#[test]
fn test_estimate_mixed_classes_moderate() {
    // 94^8 / 10^10 ≈ 609569秒，不足30天
    let estimate = estimate_crack_time("Aa1!Aa1!");
    assert_eq!(estimate.rating, StrengthRating::Moderate);
    assert_eq!(estimate.display, "Moderate (~169.3 hrs)");
    let seconds = estimate.seconds_to_crack.unwrap();
    assert!(seconds > 6.0e5 && seconds < 6.2e5);
}

#[test]
fn test_estimate_digits_strong() {
    // 10^17 / 10^10 = 10^7秒 ≈ 115.7天
    let estimate = estimate_crack_time("12345678901234567");
    assert_eq!(estimate.rating, StrengthRating::Strong);
    assert_eq!(estimate.display, "Strong (~115.7 days)");
}

#[test]
fn test_estimate_long_lowercase_very_strong() {
    let estimate = estimate_crack_time("abcdefghijklmnopqrst");
    assert_eq!(estimate.rating, StrengthRating::VeryStrong);
    assert!(estimate.display.starts_with("Very Strong (~"));
    assert!(estimate.display.ends_with("yrs)"));
}

#[test]
fn test_estimate_huge_password_astronomical() {
    // 超出f64范围，归入最高档
    let estimate = estimate_crack_time(&"a".repeat(400));
    assert_eq!(estimate.rating, StrengthRating::VeryStrong);
    assert_eq!(estimate.display, "Astronomically Strong");
    assert_eq!(estimate.seconds_to_crack, Some(f64::INFINITY));
}

#[test]
fn test_estimate_length_counts_unrecognized_characters() {
    // 空格计入长度但不扩大字母表
    let with_space = estimate_crack_time("aaa aaa");
    let without_space = estimate_crack_time("aaaaaa");
    assert_eq!(with_space.rating, StrengthRating::VeryWeak);
    assert!(with_space.seconds_to_crack.unwrap() > without_space.seconds_to_crack.unwrap());
}
