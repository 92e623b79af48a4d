//! Display-language selection and the static string bundles behind it.
//!
//! The active [`Lang`] lives in the app root and is passed down as a prop;
//! every string a component shows comes from `lang.bundle()`, so switching
//! the language re-renders the whole tree with the new bundle. Nothing is
//! persisted, the selection resets on reload.

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Lv,
    En,
    Ru,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Lv, Lang::En, Lang::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Lv => "lv",
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    /// Switcher label, as shown in the nav.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Lv => "LV",
            Lang::En => "EN",
            Lang::Ru => "RU",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "lv" | "lv-lv" => Some(Lang::Lv),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "ru" | "ru-ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    pub fn bundle(self) -> &'static Translations {
        match self {
            Lang::Lv => &LV,
            Lang::En => &EN,
            Lang::Ru => &RU,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Lv
    }
}

pub struct NavText {
    pub about: &'static str,
    pub video: &'static str,
    pub instructors: &'static str,
    pub reviews: &'static str,
    pub pricing: &'static str,
    pub apply: &'static str,
}

pub struct HeroText {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

pub struct AboutText {
    pub title: &'static str,
    pub text: &'static str,
    pub highlight: &'static str,
}

pub struct SectionText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct ReviewsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub show_more: &'static str,
    pub show_less: &'static str,
}

pub struct EstudiesText {
    pub title: &'static str,
    pub badge: &'static str,
    pub intro: &'static str,
    pub points: &'static [&'static str],
    pub cta: &'static str,
}

pub struct PricingText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub theory: &'static str,
    pub theory_price: &'static str,
    pub manual: &'static str,
    pub manual_price: &'static str,
    pub auto: &'static str,
    pub auto_price: &'static str,
    pub exam: &'static str,
    pub exam_detail: &'static str,
}

pub struct Instructor {
    pub name: &'static str,
    pub role: &'static str,
}

pub struct InstructorsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub list: &'static [Instructor],
}

pub struct ContactText {
    pub form_title: &'static str,
    pub form_subtitle: &'static str,
    pub form_name: &'static str,
    pub form_phone: &'static str,
    pub form_code: &'static str,
    pub form_email: &'static str,
    pub form_comment: &'static str,
    pub form_submit: &'static str,
    pub form_sending: &'static str,
    pub form_consent: &'static str,
    pub error_generic: &'static str,
    pub error_network: &'static str,
    pub success_title: &'static str,
    pub success_text: &'static str,
    pub cta_title: &'static str,
    pub cta_text: &'static str,
    pub cta_call: &'static str,
    pub cta_write: &'static str,
    pub cta_button: &'static str,
    pub cta_note: &'static str,
}

pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub video_guide: SectionText,
    pub social: SectionText,
    pub reviews: ReviewsText,
    pub estudies: EstudiesText,
    pub pricing: PricingText,
    pub instructors: InstructorsText,
    pub contact: ContactText,
}

static LV: Translations = Translations {
    nav: NavText {
        about: "Par mums",
        video: "Ceļvedis",
        instructors: "Instruktori",
        reviews: "Atsauksmes",
        pricing: "Cenas",
        apply: "Pieteikties",
    },
    hero: HeroText {
        badge: "Premium apmācība",
        title: "Kļūsti par autovadītāju ar pārliecību.",
        subtitle: "Modernākā autoskola Rīgā. Pieredze. Profesionalitāte. Atbildība.",
        cta_primary: "Pieteikties kursam",
        cta_secondary: "Uzzināt vairāk",
    },
    about: AboutText {
        title: "Par mums",
        text: "Pieredze, profesionalitāte, atbildība un moderna pieeja mācībām ir mūsu vērtību pamatā. Piedāvājam B kategorijas auto vadīšanas apmācību un teoriju. Kā arī pie mūsu instruktoriem iespējams atjaunot aizmirstas braukšanas iemaņas un apgūt profesionālas parkošanās prasmes. Pats galvenais – mēs vienmēr esam labā garastāvoklī un apņēmības pilni palīdzēt Tev iegūt tiesības vai atsvaidzināt braukšanas iemaņas.",
        highlight: "Mēs vienmēr esam labā garastāvoklī!",
    },
    video_guide: SectionText {
        title: "Apmācību Video",
        subtitle: "Praktiski padomi un manevri, kas palīdzēs Tev sagatavoties CSDD eksāmenam un drošai braukšanai ikdienā.",
    },
    social: SectionText {
        title: "Esi lietas kursā",
        subtitle: "Sekojiet mums sociālajos tīklos un uzziniet pirmais par akcijām, jaunumiem un noderīgiem braukšanas padomiem!",
    },
    reviews: ReviewsText {
        title: "Studentu Atsauksmes",
        subtitle: "Vairāk nekā 500+ pozitīvu atsauksmju mūsu Facebook lapā.",
        cta: "Skatīt visas atsauksmes Facebook",
        show_more: "Parādīt vēl",
        show_less: "Rādīt mazāk",
    },
    estudies: EstudiesText {
        title: "E-Studijas",
        badge: "Latvijā unikāla iespēja",
        intro: "Piedāvājam jaunu un Latvijā unikālu iespēju – E-Studijas. Apgūstiet ceļu satiksmes noteikumus (CSN) jebkurā vietā un jebkurā laikā.",
        points: &[
            "Nav jāgaida mācību grupa – sāc uzreiz.",
            "Skaidrojoši video un testi pašmācībai.",
            "Piekļuve mācību materiāliem 24/7.",
            "3 nodarbības kopā ar pasniedzēju klasē.",
        ],
        cta: "Pieteikties online",
    },
    pricing: PricingText {
        title: "B kategorijas Cenas",
        subtitle: "Caurspīdīgas izmaksas. Nav slēptu maksājumu.",
        theory: "Teorijas kurss un dokumenti",
        theory_price: "59 €",
        manual: "Braukšana (90 min) - Mehānika",
        manual_price: "45 €",
        auto: "Braukšana (90 min) - Automāts",
        auto_price: "45 €",
        exam: "Teorijas eksāmens",
        exam_detail: "Pirmās 2 reizes – bezmaksas",
    },
    instructors: InstructorsText {
        title: "Mūsu instruktori",
        subtitle: "Profesionāļi, kuri palīdzēs Tev sasniegt mērķi ar smaidu.",
        list: &[
            Instructor { name: "Jānis Neimanis", role: "Instruktors / pasniedzējs" },
            Instructor { name: "Gatis Vaitovičs", role: "Instruktors / pasniedzējs" },
            Instructor { name: "Miks Felsbergs", role: "Instruktors / pasniedzējs" },
            Instructor { name: "Kaspars Sēja", role: "Instruktors" },
        ],
    },
    contact: ContactText {
        form_title: "Pieteikties tagad",
        form_subtitle: "Aizpildi formu un mēs sazināsimies!",
        form_name: "Vārds *",
        form_phone: "Telefona nr. *",
        form_code: "Personas koda pirmā daļa",
        form_email: "E-pasts *",
        form_comment: "Komentārs",
        form_submit: "Sūtīt",
        form_sending: "Sūtu...",
        form_consent: "Nosūtot, jūs piekrītat, ka ar jums sazināsimies.",
        error_generic: "Neizdevās nosūtīt pieteikumu.",
        error_network: "Tīkla kļūda. Pamēģini vēlreiz.",
        success_title: "Pieteikums saņemts!",
        success_text: "Paldies! Mēs sazināsimies tuvākajā laikā!",
        cta_title: "Gatavs sākt?",
        cta_text: "Piesakies apmācībām jau šodien — mēs ar tevi sazināsimies un palīdzēsim izvēlēties piemērotāko apmācību veidu.",
        cta_call: "Zvaniet",
        cta_write: "Rakstiet",
        cta_button: "Pieteikties apmācībām",
        cta_note: "Aizpildi pieteikuma formu, un mēs ar tevi sazināsimies tuvākajā laikā.",
    },
};

static EN: Translations = Translations {
    nav: NavText {
        about: "About",
        video: "Videos",
        instructors: "Staff",
        reviews: "Reviews",
        pricing: "Pricing",
        apply: "Apply",
    },
    hero: HeroText {
        badge: "Premium Training",
        title: "Drive with Confidence.",
        subtitle: "Modern driving school in Riga.",
        cta_primary: "Apply Now",
        cta_secondary: "Learn More",
    },
    about: AboutText {
        title: "About Us",
        text: "Professionalism, responsibility and a modern approach to training are at the core of our values. We offer category B driving lessons and theory, and our instructors can also help you refresh forgotten driving skills or master parking.",
        highlight: "Always in a good mood!",
    },
    video_guide: SectionText {
        title: "Training Videos",
        subtitle: "Practical tips to help you pass your exam.",
    },
    social: SectionText {
        title: "Stay Connected",
        subtitle: "Follow us on social media for the latest updates and tips!",
    },
    reviews: ReviewsText {
        title: "Student Reviews",
        subtitle: "500+ reviews on our Facebook page.",
        cta: "View on Facebook",
        show_more: "Show more",
        show_less: "Show less",
    },
    estudies: EstudiesText {
        title: "E-Studies",
        badge: "Unique Opportunity",
        intro: "A new e-learning system, unique in Latvia. Study the road traffic rules anywhere, anytime.",
        points: &[
            "No waiting for a study group – start right away.",
            "Video lessons and self-study tests.",
            "Access to the materials 24/7.",
            "3 classroom lessons with a teacher.",
        ],
        cta: "Apply Online",
    },
    pricing: PricingText {
        title: "Category B Pricing",
        subtitle: "Transparent costs. No hidden fees.",
        theory: "Theory course and documents",
        theory_price: "59 €",
        manual: "Driving (90 min) - Manual",
        manual_price: "45 €",
        auto: "Driving (90 min) - Automatic",
        auto_price: "45 €",
        exam: "Theory exam",
        exam_detail: "First 2 attempts free",
    },
    instructors: InstructorsText {
        title: "Instructors",
        subtitle: "Professionals who will get you there with a smile.",
        list: &[],
    },
    contact: ContactText {
        form_title: "Apply now",
        form_subtitle: "Fill in the form and we will get in touch!",
        form_name: "Name *",
        form_phone: "Phone *",
        form_code: "ID code, first part",
        form_email: "Email *",
        form_comment: "Comment",
        form_submit: "Submit",
        form_sending: "Sending...",
        form_consent: "By submitting you agree to be contacted.",
        error_generic: "Failed to send the application.",
        error_network: "Network error. Please try again.",
        success_title: "Application received!",
        success_text: "Thank you! We will contact you shortly!",
        cta_title: "Ready to start?",
        cta_text: "Apply for training today — we will contact you and help pick the right course.",
        cta_call: "Call us",
        cta_write: "Write to us",
        cta_button: "Apply for training",
        cta_note: "Fill in the application form and we will contact you shortly.",
    },
};

static RU: Translations = Translations {
    nav: NavText {
        about: "О нас",
        video: "Видео",
        instructors: "Инструкторы",
        reviews: "Отзывы",
        pricing: "Цены",
        apply: "Записаться",
    },
    hero: HeroText {
        badge: "Премиум обучение",
        title: "Станьте водителем.",
        subtitle: "Современная автошкола в Риге.",
        cta_primary: "Записаться",
        cta_secondary: "Подробнее",
    },
    about: AboutText {
        title: "О нас",
        text: "Опыт, профессионализм, ответственность и современный подход к обучению — основа наших ценностей. Предлагаем обучение вождению категории B и теорию, а также восстановление навыков вождения и уроки парковки.",
        highlight: "Всегда на позитиве!",
    },
    video_guide: SectionText {
        title: "Видео уроки",
        subtitle: "Практические советы для экзамена.",
    },
    social: SectionText {
        title: "Будьте в курсе",
        subtitle: "Следите за нами в соцсетях!",
    },
    reviews: ReviewsText {
        title: "Отзывы",
        subtitle: "Более 500+ отзывов на Facebook.",
        cta: "Читать на Facebook",
        show_more: "Показать ещё",
        show_less: "Свернуть",
    },
    estudies: EstudiesText {
        title: "Э-обучение",
        badge: "Уникально",
        intro: "Новая и уникальная для Латвии система э-обучения. Изучайте правила дорожного движения где и когда угодно.",
        points: &[
            "Не нужно ждать группу — начни сейчас.",
            "Видео уроки и тесты для самоподготовки.",
            "Доступ к материалам 24/7.",
            "3 урока в классе с преподавателем.",
        ],
        cta: "Записаться",
    },
    pricing: PricingText {
        title: "Цены категории B",
        subtitle: "Прозрачно. Без скрытых платежей.",
        theory: "Теория и документы",
        theory_price: "59 €",
        manual: "Вождение (90 мин) - Механика",
        manual_price: "45 €",
        auto: "Вождение (90 мин) - Автомат",
        auto_price: "45 €",
        exam: "Теоретический экзамен",
        exam_detail: "Первые 2 раза бесплатно",
    },
    instructors: InstructorsText {
        title: "Инструкторы",
        subtitle: "Профессионалы своего дела.",
        list: &[],
    },
    contact: ContactText {
        form_title: "Записаться",
        form_subtitle: "Заполни форму, и мы свяжемся!",
        form_name: "Имя *",
        form_phone: "Телефон *",
        form_code: "Первая часть персонального кода",
        form_email: "Email *",
        form_comment: "Комментарий",
        form_submit: "Отправить",
        form_sending: "Отправка...",
        form_consent: "Отправляя форму, вы соглашаетесь на контакт с вами.",
        error_generic: "Не удалось отправить заявку.",
        error_network: "Ошибка сети. Попробуйте ещё раз.",
        success_title: "Заявка получена!",
        success_text: "Спасибо! Мы свяжемся с вами в ближайшее время!",
        cta_title: "Готовы начать?",
        cta_text: "Запишитесь на обучение уже сегодня — мы свяжемся с вами и поможем выбрать подходящий курс.",
        cta_call: "Звоните",
        cta_write: "Пишите",
        cta_button: "Записаться на обучение",
        cta_note: "Заполните форму заявки, и мы свяжемся с вами в ближайшее время.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_latvian() {
        assert_eq!(Lang::default(), Lang::Lv);
    }

    #[test]
    fn bundle_swaps_with_language() {
        assert_eq!(Lang::Lv.bundle().nav.about, "Par mums");
        assert_eq!(Lang::En.bundle().nav.about, "About");
        assert_eq!(Lang::Ru.bundle().nav.about, "О нас");
    }

    #[test]
    fn codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("de"), None);
    }

    #[test]
    fn roster_only_in_latvian_bundle() {
        assert!(!Lang::Lv.bundle().instructors.list.is_empty());
        assert!(Lang::En.bundle().instructors.list.is_empty());
        assert!(Lang::Ru.bundle().instructors.list.is_empty());
    }
}
