// 純函式：不碰網路，備用連結永遠可以從邀請碼在本地算出

use crate::domain::model::LinkTarget;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// RFC 3986 unreserved 字元保留，其餘一律編碼
const CODE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 只編碼會破壞外層 `link=` 參數的字元，`:/?=` 保留以維持深層連結可讀
const LINK_PARAM_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'`');

pub fn encode_code(code: &str) -> String {
    utf8_percent_encode(code, CODE_ENCODE_SET).to_string()
}

/// `splitmate://parent?code=<code>`
pub fn deep_link(target: &LinkTarget, code: &str) -> String {
    format!("{}?code={}", target.deep_link_base, encode_code(code))
}

/// `https://<domain>/?link=<deep link>&apn=<package>`
///
/// `target` 需先經過 [`LinkTarget::normalized`]
pub fn fallback_link(target: &LinkTarget, code: &str) -> String {
    let deep_link = deep_link(target, code);
    format!(
        "{}/?link={}&apn={}",
        target.domain_uri_prefix,
        utf8_percent_encode(&deep_link, LINK_PARAM_ENCODE_SET),
        target.android_package_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_deep_link() {
        let target = LinkTarget::default();
        assert_eq!(
            deep_link(&target, "ABC123"),
            "splitmate://parent?code=ABC123"
        );
    }

    #[test]
    fn test_fallback_link_matches_expected_format() {
        let target = LinkTarget::default();
        assert_eq!(
            fallback_link(&target, "ABC123"),
            "https://splitmate.page.link/?link=splitmate://parent?code=ABC123&apn=com.splitmate.app"
        );
    }

    #[test]
    fn test_fallback_link_is_deterministic() {
        let target = LinkTarget::default();
        assert_eq!(fallback_link(&target, "XY-9"), fallback_link(&target, "XY-9"));
    }

    #[test]
    fn test_trailing_slash_on_domain_is_ignored() {
        let target = LinkTarget {
            domain_uri_prefix: "https://splitmate.page.link/".to_string(),
            ..LinkTarget::default()
        }
        .normalized();
        assert!(fallback_link(&target, "ABC123").starts_with("https://splitmate.page.link/?link="));
    }

    #[test]
    fn test_reserved_characters_survive_both_layers() {
        let target = LinkTarget::default();
        let code = "A&B C#1";

        assert_eq!(
            deep_link(&target, code),
            "splitmate://parent?code=A%26B%20C%231"
        );

        // 解碼一次 `link` 參數得到原深層連結，再解碼一次得到原邀請碼
        let fallback = Url::parse(&fallback_link(&target, code)).unwrap();
        let link_param = fallback
            .query_pairs()
            .find(|(k, _)| k == "link")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(link_param, deep_link(&target, code));

        let apn = fallback
            .query_pairs()
            .find(|(k, _)| k == "apn")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(apn, "com.splitmate.app");

        let deep = Url::parse(&link_param).unwrap();
        let decoded_code = deep
            .query_pairs()
            .find(|(k, _)| k == "code")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(decoded_code, code);
    }
}
