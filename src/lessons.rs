/// Static lesson catalog: home row outward, then words, then sentences.
/// Placement recommendations land on the base lessons 1/3/6/11/16.
pub struct Lesson {
    pub id: u8,
    pub title: &'static str,
    pub new_keys: &'static [char],
    pub lines: &'static [&'static str],
    pub pass_wpm: u32,
    pub pass_accuracy: u32,
}

pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: 1,
        title: "שורת הבית - יד שמאל",
        new_keys: &['ש', 'ד', 'ג', 'כ'],
        lines: &["שדגכ שדגכ שדגכ", "כגדש דשכג גשדכ", "שג דכ שכ גד שדגכ"],
        pass_wpm: 4,
        pass_accuracy: 85,
    },
    Lesson {
        id: 2,
        title: "שורת הבית - יד ימין",
        new_keys: &['ח', 'ל', 'ך', 'ף'],
        lines: &["חלךף חלךף חלךף", "ףךלח לחףך חףלך", "חל ךף לח ףך חלךף"],
        pass_wpm: 4,
        pass_accuracy: 85,
    },
    Lesson {
        id: 3,
        title: "שורת הבית המלאה",
        new_keys: &['ע', 'י'],
        lines: &["שדגכ עיחל שדגכ עיחל", "גל דש כח עי לך שף", "דג של חג גיל ילד"],
        pass_wpm: 5,
        pass_accuracy: 85,
    },
    Lesson {
        id: 4,
        title: "השורה העליונה - חלק א",
        new_keys: &['ק', 'ר', 'א', 'ט'],
        lines: &["קראט קראט קראט", "קר את רק טא ראש", "אשר קרא רעש אגרט"],
        pass_wpm: 6,
        pass_accuracy: 85,
    },
    Lesson {
        id: 5,
        title: "השורה העליונה - חלק ב",
        new_keys: &['ו', 'ן', 'ם', 'פ'],
        lines: &["וןםפ וןםפ וןםפ", "פה גן שם עוד קול", "שיר גשם אור פרח"],
        pass_wpm: 7,
        pass_accuracy: 88,
    },
    Lesson {
        id: 6,
        title: "השורה התחתונה - חלק א",
        new_keys: &['ז', 'ס', 'ב', 'ה'],
        lines: &["זסבה זסבה זסבה", "זה בא סב הר בית", "הזיז סבב הביא זהב"],
        pass_wpm: 8,
        pass_accuracy: 88,
    },
    Lesson {
        id: 7,
        title: "השורה התחתונה - חלק ב",
        new_keys: &['נ', 'מ', 'צ', 'ת', 'ץ'],
        lines: &["נמצת נמצת ץ ץ ץ", "מה נר צב תל עץ", "מים נמל צמר תמר"],
        pass_wpm: 9,
        pass_accuracy: 88,
    },
    Lesson {
        id: 8,
        title: "כל האותיות",
        new_keys: &[],
        lines: &["אבגד הוזח טיכל", "מנסע פצקר שתםן", "ךףץ ךףץ אות סוף"],
        pass_wpm: 10,
        pass_accuracy: 90,
    },
    Lesson {
        id: 9,
        title: "מילים קצרות",
        new_keys: &[],
        lines: &["אבא אמא ילד גן", "דג עץ הר ים שם", "חג טל נר פה צב"],
        pass_wpm: 11,
        pass_accuracy: 90,
    },
    Lesson {
        id: 10,
        title: "אותיות סופיות",
        new_keys: &[],
        lines: &["שלום לחם מים גשם", "ארץ עץ קיץ חורף", "גוף כיף דרך מלך"],
        pass_wpm: 12,
        pass_accuracy: 90,
    },
    Lesson {
        id: 11,
        title: "משפטים ראשונים",
        new_keys: &[],
        lines: &["הילד רץ לגן", "אמא אופה לחם חם", "הדג שט בים הגדול"],
        pass_wpm: 14,
        pass_accuracy: 90,
    },
    Lesson {
        id: 12,
        title: "משפטים עם מילים ארוכות",
        new_keys: &[],
        lines: &["הילדה מציירת פרח יפה", "החתול ישן על הכיסא", "המורה כותבת על הלוח"],
        pass_wpm: 16,
        pass_accuracy: 92,
    },
    Lesson {
        id: 13,
        title: "משפטים ארוכים",
        new_keys: &[],
        lines: &["אבא ואמא הלכו לשוק לקנות פירות", "הילדים שיחקו בכדור בחצר הבית"],
        pass_wpm: 18,
        pass_accuracy: 92,
    },
    Lesson {
        id: 14,
        title: "תרגול מהירות",
        new_keys: &[],
        lines: &["גשם ירד כל הלילה על העיר", "בבוקר זרחה השמש מעל ההרים"],
        pass_wpm: 20,
        pass_accuracy: 92,
    },
    Lesson {
        id: 15,
        title: "תרגול דיוק",
        new_keys: &[],
        lines: &["הצפרדע קפצה מהאגם אל הסלע", "הפרפר עף מפרח לפרח בגינה"],
        pass_wpm: 22,
        pass_accuracy: 94,
    },
    Lesson {
        id: 16,
        title: "קטעים קצרים",
        new_keys: &[],
        lines: &[
            "ביום שישי נסעה המשפחה לים",
            "הילדים בנו ארמון גדול מחול",
            "בערב חזרו הביתה עייפים ושמחים",
        ],
        pass_wpm: 24,
        pass_accuracy: 94,
    },
    Lesson {
        id: 17,
        title: "קטעים בינוניים",
        new_keys: &[],
        lines: &[
            "בגן החיות ראינו אריה גדול",
            "הקוף קיפץ בין הענפים הגבוהים",
            "הפיל שתה מים בחדק הארוך שלו",
        ],
        pass_wpm: 26,
        pass_accuracy: 94,
    },
    Lesson {
        id: 18,
        title: "סיפור קצר",
        new_keys: &[],
        lines: &[
            "היה היה פעם מלך חכם וטוב לב",
            "המלך אהב לטייל בשדות הממלכה",
            "כל הילדים שמחו לראות אותו עובר",
        ],
        pass_wpm: 28,
        pass_accuracy: 95,
    },
    Lesson {
        id: 19,
        title: "הקלדה שוטפת",
        new_keys: &[],
        lines: &[
            "הספרים פותחים לנו דלת לעולמות חדשים",
            "מי שקורא הרבה לומד מילים חדשות",
            "וכותב סיפורים יפים משל עצמו",
        ],
        pass_wpm: 30,
        pass_accuracy: 95,
    },
    Lesson {
        id: 20,
        title: "אלוף ההקלדה",
        new_keys: &[],
        lines: &[
            "עשרים שיעורים עברת ועכשיו אתה אלוף",
            "האצבעות שלך יודעות את הדרך לבד",
            "כל מילה רצה מהראש אל המסך בלי להביט",
        ],
        pass_wpm: 32,
        pass_accuracy: 95,
    },
];

pub fn lesson(id: u8) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::layout;

    #[test]
    fn test_catalog_has_twenty_sequential_lessons() {
        assert_eq!(LESSONS.len(), 20);
        for (i, l) in LESSONS.iter().enumerate() {
            assert_eq!(l.id as usize, i + 1);
            assert!(!l.lines.is_empty());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(lesson(1).unwrap().id, 1);
        assert_eq!(lesson(20).unwrap().id, 20);
        assert!(lesson(0).is_none());
        assert!(lesson(21).is_none());
    }

    #[test]
    fn test_thresholds_never_decrease() {
        for pair in LESSONS.windows(2) {
            assert!(pair[1].pass_wpm >= pair[0].pass_wpm);
            assert!(pair[1].pass_accuracy >= pair[0].pass_accuracy);
        }
    }

    #[test]
    fn test_every_lesson_char_is_typeable() {
        for l in LESSONS {
            for line in l.lines {
                for ch in line.chars() {
                    assert!(
                        layout::key_for(ch).is_some(),
                        "lesson {} contains unmapped char {:?}",
                        l.id,
                        ch
                    );
                }
            }
        }
    }

    #[test]
    fn test_placement_recommendations_exist_in_catalog() {
        use crate::placement::classify::{determine_level, recommended_lesson};

        for wpm in 0..120 {
            let level = determine_level(wpm);
            assert!(lesson(recommended_lesson(level, wpm)).is_some());
        }
    }
}
