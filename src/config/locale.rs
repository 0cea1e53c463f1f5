use serde::{Deserialize, Serialize};

/// Language used for prompts and result lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub prompt_first_start: &'static str,
    pub prompt_first_end: &'static str,
    pub prompt_second_start: &'static str,
    pub prompt_second_end: &'static str,
    pub invalid_number: &'static str,
    pub segment_noun: &'static str,
    pub first_label: &'static str,
    pub second_label: &'static str,
    pub intersection_label: &'static str,
    pub no_intersection: &'static str,
    pub error_prefix: &'static str,
}

static EN: Messages = Messages {
    prompt_first_start: "Enter the start of the first segment: ",
    prompt_first_end: "Enter the end of the first segment: ",
    prompt_second_start: "Enter the start of the second segment: ",
    prompt_second_end: "Enter the end of the second segment: ",
    invalid_number: "Error: invalid value entered. Please enter a number.",
    segment_noun: "Segment",
    first_label: "First",
    second_label: "Second",
    intersection_label: "Intersection",
    no_intersection: "Segments do not intersect.",
    error_prefix: "An error occurred: ",
};

static RU: Messages = Messages {
    prompt_first_start: "Введите координату начала первого отрезка: ",
    prompt_first_end: "Введите координату конца первого отрезка: ",
    prompt_second_start: "Введите координату начала второго отрезка: ",
    prompt_second_end: "Введите координату конца второго отрезка: ",
    invalid_number: "Ошибка: Введено некорректное значение. Пожалуйста, введите число.",
    segment_noun: "Отрезок",
    first_label: "Первый",
    second_label: "Второй",
    intersection_label: "Пересечение",
    no_intersection: "Отрезки не пересекаются.",
    error_prefix: "Произошла ошибка: ",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().messages().segment_noun, "Segment");
    }

    #[test]
    fn test_russian_catalog() {
        let m = Locale::Ru.messages();
        assert_eq!(m.segment_noun, "Отрезок");
        assert_eq!(m.first_label, "Первый");
        assert_eq!(m.no_intersection, "Отрезки не пересекаются.");
    }

    #[test]
    fn test_locale_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let w: Wrapper = toml::from_str(r#"locale = "ru""#).unwrap();
        assert_eq!(w.locale, Locale::Ru);
    }
}
