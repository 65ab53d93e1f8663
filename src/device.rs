/// Tokens that mark a client identity string as a handheld device.
/// Matching is case-sensitive substring search, so "mobile" catches the
/// lowercase token most vendors ship while "Mobile Safari" does not
/// reclassify a desktop UA that merely mentions it capitalized.
const MOBILE_TOKENS: &[&str] = &["iPhone", "iPod", "Android", "Blackberry", "mobile"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classify a client identity string (User-Agent). Empty or absent
    /// descriptors classify as desktop.
    pub fn classify(descriptor: &str) -> DeviceClass {
        if MOBILE_TOKENS.iter().any(|t| descriptor.contains(t)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_classifies_as_mobile() {
        for token in ["iPhone", "iPod", "Android", "Blackberry", "mobile"] {
            let ua = format!("Mozilla/5.0 ({} test build)", token);
            assert_eq!(DeviceClass::classify(&ua), DeviceClass::Mobile, "{}", token);
        }
    }

    #[test]
    fn empty_descriptor_is_desktop() {
        assert_eq!(DeviceClass::classify(""), DeviceClass::Desktop);
    }

    #[test]
    fn desktop_ua_is_desktop() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Gecko/20100101 Firefox/115.0";
        assert_eq!(DeviceClass::classify(ua), DeviceClass::Desktop);
        assert!(!DeviceClass::classify(ua).is_mobile());
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(DeviceClass::classify("ANDROID phone"), DeviceClass::Desktop);
        assert_eq!(DeviceClass::classify("android phone"), DeviceClass::Desktop);
        assert_eq!(DeviceClass::classify("an Android phone"), DeviceClass::Mobile);
    }

    #[test]
    fn token_inside_longer_string_matches() {
        assert!(DeviceClass::classify("Opera Mobile/12 (mobile; rv:1)").is_mobile());
    }
}
