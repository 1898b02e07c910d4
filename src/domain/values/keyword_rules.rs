//! Name-keyword buckets used to split a remote category into sub-tabs.
//!
//! The remote API exposes one category code for all life materials and one for
//! all battle items, so sub-tabs are carved out by matching item names.

/// An item matches when its name contains any `include` keyword and none of
/// the `exclude` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

impl KeywordRule {
    pub const fn including(include: &'static [&'static str]) -> Self {
        Self {
            include,
            exclude: &[],
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.include.iter().any(|k| name.contains(k))
            && !self.exclude.iter().any(|k| name.contains(k))
    }
}

/// Sub-category value meaning "no sub-filter".
pub const ALL: &str = "전체";

/// Life material buckets (mining, logging, archaeology, fishing, gathering,
/// hunting, other).
pub const LIFE_RULES: &[(&[&str], KeywordRule)] = &[
    (&["채광"], KeywordRule::including(&["철광석"])),
    (&["벌목"], KeywordRule::including(&["목재"])),
    (&["고고학"], KeywordRule::including(&["유물", "고고학"])),
    (&["낚시"], KeywordRule::including(&["생선", "잉어", "진주"])),
    (&["채집"], KeywordRule::including(&["들꽃", "버섯"])),
    (&["수렵"], KeywordRule::including(&["고기", "가죽"])),
    (&["기타"], KeywordRule::including(&["제작 키트"])),
];

/// Battle item buckets (recovery, attack, utility, buff). The buff bucket
/// excludes recovery and time-stop items so they land in one bucket only.
pub const BATTLE_RULES: &[(&[&str], KeywordRule)] = &[
    (&["회복", "회복형"], KeywordRule::including(&["회복약"])),
    (
        &["공격", "공격형"],
        KeywordRule::including(&["폭탄", "수류탄", "파괴"]),
    ),
    (
        &["기능", "기능성"],
        KeywordRule::including(&[
            "신호탄",
            "페로몬",
            "부적",
            "로브",
            "허수아비",
            "시간 정지",
            "정비",
        ]),
    ),
    (
        &["버프", "버프형"],
        KeywordRule {
            include: &["각성약", "아드로핀", "물약"],
            exclude: &["회복약", "시간 정지"],
        },
    ),
];

/// Look up the rule for a sub-category. `None` for "전체", unset or unknown
/// sub-categories, all of which keep every item.
pub fn lookup(
    table: &'static [(&'static [&'static str], KeywordRule)],
    sub_category: Option<&str>,
) -> Option<KeywordRule> {
    let sub = sub_category.map(str::trim).filter(|s| !s.is_empty() && *s != ALL)?;
    table
        .iter()
        .find(|(names, _)| names.iter().any(|n| *n == sub))
        .map(|(_, rule)| *rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_lookup() {
        let rule = lookup(LIFE_RULES, Some("낚시")).unwrap();
        assert!(rule.matches("자연산 진주"));
        assert!(rule.matches("붉은 살 생선"));
        assert!(!rule.matches("튼튼한 목재"));

        assert_eq!(lookup(LIFE_RULES, Some("기타")).unwrap().include, &["제작 키트"]);
    }

    #[test]
    fn test_all_and_unknown_have_no_rule() {
        assert!(lookup(LIFE_RULES, Some("전체")).is_none());
        assert!(lookup(LIFE_RULES, None).is_none());
        assert!(lookup(LIFE_RULES, Some("요리")).is_none());
        assert!(lookup(BATTLE_RULES, Some(" 전체 ")).is_none());
    }

    #[test]
    fn test_battle_aliases() {
        assert_eq!(lookup(BATTLE_RULES, Some("회복")), lookup(BATTLE_RULES, Some("회복형")));
        assert_eq!(lookup(BATTLE_RULES, Some(" 공격형 ")), lookup(BATTLE_RULES, Some("공격")));
    }

    #[test]
    fn test_buff_excludes_recovery_and_time_stop() {
        let buff = lookup(BATTLE_RULES, Some("버프")).unwrap();
        assert!(buff.matches("각성 물약"));
        assert!(buff.matches("아드로핀 물약"));
        assert!(!buff.matches("정령의 회복약"));
        assert!(!buff.matches("시간 정지 물약"));
    }

    #[test]
    fn test_utility_includes_time_stop() {
        let utility = lookup(BATTLE_RULES, Some("기능성")).unwrap();
        assert!(utility.matches("시간 정지 물약"));
        assert!(utility.matches("신호탄"));
    }

    struct Bucket {
        aliases: &'static [&'static str],
        include: &'static [&'static str],
        exclude: &'static [&'static str],
        hit: &'static [&'static str],
        miss: &'static str,
    }

    fn check(table: &'static [(&'static [&'static str], KeywordRule)], buckets: &[Bucket]) {
        assert_eq!(table.len(), buckets.len());
        for bucket in buckets {
            for alias in bucket.aliases {
                let rule = lookup(table, Some(*alias)).unwrap_or_else(|| panic!("no rule for {alias}"));
                assert_eq!(rule.include, bucket.include, "{alias}");
                assert_eq!(rule.exclude, bucket.exclude, "{alias}");
                for name in bucket.hit {
                    assert!(rule.matches(name), "{alias} should keep {name}");
                }
                assert!(!rule.matches(bucket.miss), "{alias} should drop {}", bucket.miss);
            }
        }
    }

    #[test]
    fn test_every_life_bucket() {
        check(
            LIFE_RULES,
            &[
                Bucket { aliases: &["채광"], include: &["철광석"], exclude: &[], hit: &["단단한 철광석"], miss: "튼튼한 목재" },
                Bucket { aliases: &["벌목"], include: &["목재"], exclude: &[], hit: &["튼튼한 목재"], miss: "단단한 철광석" },
                Bucket {
                    aliases: &["고고학"],
                    include: &["유물", "고고학"],
                    exclude: &[],
                    hit: &["오레하 유물", "고고학 파편"],
                    miss: "화사한 들꽃",
                },
                Bucket {
                    aliases: &["낚시"],
                    include: &["생선", "잉어", "진주"],
                    exclude: &[],
                    hit: &["붉은 살 생선", "황금 잉어", "자연산 진주"],
                    miss: "질긴 가죽",
                },
                Bucket {
                    aliases: &["채집"],
                    include: &["들꽃", "버섯"],
                    exclude: &[],
                    hit: &["화사한 들꽃", "투박한 버섯"],
                    miss: "오레하 유물",
                },
                Bucket {
                    aliases: &["수렵"],
                    include: &["고기", "가죽"],
                    exclude: &[],
                    hit: &["두툼한 생고기", "질긴 가죽"],
                    miss: "자연산 진주",
                },
                Bucket {
                    aliases: &["기타"],
                    include: &["제작 키트"],
                    exclude: &[],
                    hit: &["융화 재료 제작 키트"],
                    miss: "투박한 버섯",
                },
            ],
        );
    }

    #[test]
    fn test_every_battle_bucket() {
        check(
            BATTLE_RULES,
            &[
                Bucket {
                    aliases: &["회복", "회복형"],
                    include: &["회복약"],
                    exclude: &[],
                    hit: &["정령의 회복약"],
                    miss: "신호탄",
                },
                Bucket {
                    aliases: &["공격", "공격형"],
                    include: &["폭탄", "수류탄", "파괴"],
                    exclude: &[],
                    hit: &["점토 폭탄", "화염 수류탄", "파괴 폭탄"],
                    miss: "정령의 회복약",
                },
                Bucket {
                    aliases: &["기능", "기능성"],
                    include: &["신호탄", "페로몬", "부적", "로브", "허수아비", "시간 정지", "정비"],
                    exclude: &[],
                    hit: &[
                        "신호탄",
                        "만능 물약 페로몬",
                        "성스러운 부적",
                        "은신 로브",
                        "무적 허수아비",
                        "시간 정지 물약",
                        "정비 키트",
                    ],
                    miss: "화염 수류탄",
                },
                Bucket {
                    aliases: &["버프", "버프형"],
                    include: &["각성약", "아드로핀", "물약"],
                    exclude: &["회복약", "시간 정지"],
                    hit: &["빛나는 각성약", "아드로핀 물약", "진군의 물약"],
                    miss: "정령의 회복약",
                },
            ],
        );
    }
}
