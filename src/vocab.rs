//! Fixed Thai vocabulary used when reading amounts aloud.

pub const ZERO: &str = "ศูนย์";
pub const ONE: &str = "หนึ่ง";
/// "One" as read after a ten or hundred (สิบเอ็ด, ร้อยเอ็ด).
pub const ONE_CONNECTIVE: &str = "เอ็ด";
pub const TWO: &str = "สอง";
/// "Two" in the tens position (ยี่สิบ).
pub const TWO_TENS: &str = "ยี่";
pub const THREE: &str = "สาม";
pub const FOUR: &str = "สี่";
pub const FIVE: &str = "ห้า";
pub const SIX: &str = "หก";
pub const SEVEN: &str = "เจ็ด";
pub const EIGHT: &str = "แปด";
pub const NINE: &str = "เก้า";

pub const TEN: &str = "สิบ";
pub const HUNDRED: &str = "ร้อย";
pub const THOUSAND: &str = "พัน";
pub const TEN_THOUSAND: &str = "หมื่น";
pub const HUNDRED_THOUSAND: &str = "แสน";
pub const MILLION: &str = "ล้าน";

pub const NEGATIVE: &str = "ลบ";
pub const BAHT: &str = "บาท";
pub const SATANG: &str = "สตางค์";
/// Closes an amount with no satang.
pub const EVEN: &str = "ถ้วน";
