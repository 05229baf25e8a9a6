pub mod common {
    pub const LOADING: &str = "در حال بارگذاری...";
    pub const BACK_HOME: &str = "بازگشت به خانه";
    pub const CLOSE: &str = "بستن";
}

pub mod header {
    pub const NAV_HOME: &str = "خانه";
    pub const NAV_GUIDE: &str = "راهنما";
    pub const NAV_EDITOR: &str = "نوشتن مقاله";
    pub const NAV_MAIN_ARIA: &str = "ناوبری اصلی";
    pub const OPEN_MENU_ARIA: &str = "باز کردن منو";
    pub const LOGO_ALT: &str = "لوگوی ابزارستان";
}

pub mod footer {
    pub const COPYRIGHT: &str = "© ابزارستان. تمامی حقوق محفوظ است.";
    pub const TAGLINE: &str = "ابزارهایی برای اینترنت آزاد";
}

pub mod notices {
    pub const LIKED: &str = "مقاله پسندیده شد!";
    pub const UNLIKED: &str = "پسند برداشته شد";
    pub const BOOKMARKED: &str = "مقاله ذخیره شد!";
    pub const UNBOOKMARKED: &str = "ذخیره برداشته شد";
    pub const COMMENT_POSTED: &str = "نظر شما ثبت شد";
    pub const COMMENT_EMPTY: &str = "لطفاً نظر خود را بنویسید";
    pub const COMMENT_FAILED: &str = "خطا در ثبت نظر";
    pub const LINK_COPIED: &str = "لینک کپی شد!";
    pub const LINK_COPY_FAILED: &str = "خطا در کپی لینک";
    pub const STORAGE_FAILED: &str = "ذخیره‌سازی در مرورگر ممکن نیست";
}

pub mod article {
    pub const READING_TIME_TEMPLATE: &str = "{} دقیقه";
    pub const VIEWS_TEMPLATE: &str = "{} بازدید";
    pub const META_ARIA: &str = "اطلاعات مقاله";
    pub const BODY_ARIA: &str = "متن مقاله";
    pub const LIKE: &str = "پسندیدن";
    pub const BOOKMARK: &str = "ذخیره";
    pub const TAGS_TITLE: &str = "برچسب‌ها";
    pub const NOT_FOUND_TITLE: &str = "مقاله یافت نشد";
    pub const NOT_FOUND_TEXT: &str = "متأسفانه مقاله مورد نظر پیدا نشد.";
}

pub mod share_bar {
    pub const TITLE: &str = "اشتراک‌گذاری";
    pub const COPY_LINK: &str = "کپی لینک";
}

pub mod toc {
    pub const TITLE: &str = "فهرست مطالب";
    pub const ARIA: &str = "فهرست مطالب مقاله";
}

pub mod related {
    pub const TITLE: &str = "مقالات مرتبط";
    pub const EMPTY: &str = "مقاله مرتبطی یافت نشد";
}

pub mod comments {
    pub const TITLE: &str = "نظرات";
    pub const EMPTY: &str = "هنوز نظری ثبت نشده است.";
    pub const PLACEHOLDER: &str = "نظر خود را بنویسید...";
    pub const SUBMIT: &str = "ارسال نظر";
}

pub mod home {
    pub const TITLE: &str = "ابزارستان";
    pub const INTRO: &str = "تحلیل و گزارش درباره اینترنت، سانسور و ابزارهای دسترسی آزاد.";
    pub const SEARCH_PLACEHOLDER: &str = "جستجو در مقالات...";
    pub const SEARCH_ARIA: &str = "جستجو";
    pub const NO_RESULTS: &str = "مقاله‌ای با این عبارت یافت نشد";
    pub const RESULTS_TEMPLATE: &str = "نتایج جستجو برای «{}»";
    pub const READ_MORE: &str = "ادامه مطلب";
}

pub mod editor {
    pub const PAGE_TITLE_NEW: &str = "مقاله جدید";
    pub const PAGE_TITLE_EDIT: &str = "ویرایش مقاله";
    pub const TITLE_LABEL: &str = "عنوان";
    pub const SLUG_LABEL: &str = "نامک (slug)";
    pub const CATEGORY_LABEL: &str = "دسته‌بندی";
    pub const CATEGORY_PLACEHOLDER: &str = "انتخاب دسته‌بندی";
    pub const CATEGORIES: [&str; 5] = ["تکنولوژی", "امنیت", "سانسور", "اقتصاد", "آموزش"];
    pub const AUTHOR_LABEL: &str = "نویسنده";
    pub const EXCERPT_LABEL: &str = "خلاصه";
    pub const TAGS_LABEL: &str = "برچسب‌ها (با کاما جدا کنید)";
    pub const CONTENT_LABEL: &str = "متن مقاله";
    pub const COVER_LABEL: &str = "تصویر کاور";
    pub const COVER_UPLOAD_TAB: &str = "آپلود";
    pub const COVER_URL_TAB: &str = "لینک";
    pub const COVER_URL_PLACEHOLDER: &str = "https://...";
    pub const COVER_LOAD: &str = "بارگذاری";
    pub const COVER_ALT: &str = "کاور";
    pub const SAVE_DRAFT: &str = "ذخیره پیش‌نویس";
    pub const PUBLISH: &str = "انتشار";
    pub const PREVIEW: &str = "پیش‌نمایش";
    pub const REQUIRED_FIELDS: &str = "لطفاً فیلدهای ضروری را پر کنید";
    pub const PUBLISHED: &str = "مقاله با موفقیت منتشر شد!";
    pub const DRAFT_SAVED: &str = "پیش‌نویس ذخیره شد!";
    pub const SAVE_FAILED: &str = "خطا در ذخیره مقاله";
    pub const NOT_FOUND: &str = "مقاله یافت نشد!";
    pub const PROMPT_LINK: &str = "لینک را وارد کنید:";
    pub const PROMPT_IMAGE: &str = "آدرس تصویر را وارد کنید:";
    pub const PROMPT_CODE: &str = "کد را وارد کنید:";
    pub const TOOLBAR_ARIA: &str = "ابزار قالب‌بندی";
}

pub mod guide {
    pub const PAGE_TITLE: &str = "راهنمای پنل BPB";
    pub const SIDEBAR_TITLE: &str = "فهرست راهنما";
    pub const HIDE: &str = "[پنهان]";
    pub const SHOW: &str = "[نمایش]";
    pub const OPEN_SIDEBAR_ARIA: &str = "باز کردن فهرست راهنما";
    pub const COPY: &str = "کپی";
    pub const COPIED: &str = "کپی شد!";

    pub struct Section {
        pub id: &'static str,
        pub title: &'static str,
        pub paragraphs: &'static [&'static str],
        pub code: Option<&'static str>,
    }

    pub const SECTIONS: &[Section] = &[
        Section {
            id: "intro",
            title: "پنل BPB چیست؟",
            paragraphs: &[
                "پنل BPB یک اسکریپت رایگان برای ساخت سرور شخصی روی Cloudflare Workers است که \
                 بدون نیاز به سرور مجازی، کانفیگ‌های VLESS و Trojan تولید می‌کند.",
                "این راهنما مراحل ساخت، تنظیم و اتصال به پنل را قدم به قدم توضیح می‌دهد.",
            ],
            code: None,
        },
        Section {
            id: "requirements",
            title: "پیش‌نیازها",
            paragraphs: &[
                "یک حساب Cloudflare با ایمیل معتبر.",
                "یک کلاینت سازگار مانند v2rayNG، Hiddify یا Streisand.",
            ],
            code: None,
        },
        Section {
            id: "worker",
            title: "ساخت Worker",
            paragraphs: &[
                "در داشبورد Cloudflare بخش Workers & Pages را باز کنید و یک Worker جدید بسازید.",
                "کد worker.js را از آخرین نسخه پروژه در آن قرار دهید و ذخیره کنید.",
            ],
            code: Some("npx wrangler deploy worker.js --name my-panel"),
        },
        Section {
            id: "kv",
            title: "تنظیم KV و متغیرها",
            paragraphs: &[
                "یک KV Namespace بسازید و آن را با نام bpb به Worker متصل کنید.",
                "متغیر UUID را با مقدار یکتای خود تعریف کنید.",
            ],
            code: Some("npx wrangler kv namespace create bpb"),
        },
        Section {
            id: "connect",
            title: "اتصال به پنل",
            paragraphs: &[
                "آدرس Worker را با پسوند /panel باز کنید و رمز عبور پنل را تعیین کنید.",
                "لینک اشتراک را کپی کرده و در کلاینت خود وارد کنید.",
            ],
            code: Some("https://my-panel.example.workers.dev/panel"),
        },
        Section {
            id: "faq",
            title: "سوالات متداول",
            paragraphs: &[
                "اگر اتصال برقرار نشد، IP تمیز را از بخش تنظیمات پنل تغییر دهید.",
                "محدودیت روزانه درخواست‌های Workers رایگان صد هزار درخواست است.",
            ],
            code: None,
        },
    ];
}

pub mod not_found {
    pub const TITLE: &str = "۴۰۴ - صفحه یافت نشد";
    pub const TEXT: &str = "متأسفانه صفحه‌ای که به دنبال آن هستید وجود ندارد.";
}
