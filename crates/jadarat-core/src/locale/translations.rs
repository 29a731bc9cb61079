//! Built-in translation tables.
//!
//! Both tables must declare exactly the same keys. `lookup` never falls back
//! across languages.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::language::Language;

const EN: &[(&str, &str)] = &[
    ("app.name", "Jadarat ATS"),
    // Login
    ("login.title", "Welcome Back"),
    ("login.description", "Sign in to your Jadarat ATS account"),
    ("login.email", "Email"),
    ("login.emailPlaceholder", "name@company.com"),
    ("login.password", "Password"),
    ("login.signIn", "Sign In"),
    ("login.signingIn", "Signing in..."),
    ("login.signedIn", "Signed in"),
    ("login.noAccount", "Don't have an account?"),
    ("login.signUp", "Sign up"),
    ("login.forgotPassword", "Forgot password?"),
    ("login.required", "Sign in to continue"),
    // Signup
    ("signup.title", "Create Account"),
    ("signup.description", "Get started with Jadarat ATS"),
    ("signup.firstName", "First Name"),
    ("signup.lastName", "Last Name"),
    ("signup.email", "Email"),
    ("signup.password", "Password"),
    ("signup.confirmPassword", "Confirm Password"),
    ("signup.signUp", "Create Account"),
    ("signup.signingUp", "Creating account..."),
    ("signup.haveAccount", "Already have an account?"),
    ("signup.signIn", "Sign in"),
    ("signup.passwordMismatch", "Passwords do not match"),
    ("signup.passwordTooShort", "Password must be at least 8 characters"),
    ("signup.successTitle", "Check your email"),
    (
        "signup.successMessage",
        "We sent you a confirmation link. Please check your email to verify your account.",
    ),
    // Dashboard
    ("dashboard.welcomeTitle", "Welcome to Jadarat ATS"),
    (
        "dashboard.welcomeSubtitle",
        "AI-Powered Applicant Tracking System for MENA Region",
    ),
    ("dashboard.totalOrganizations", "Total Organizations"),
    ("dashboard.totalOrganizationsCaption", "Active tenants on platform"),
    ("dashboard.activeUsers", "Active Users"),
    ("dashboard.activeUsersCaption", "Across all organizations"),
    ("dashboard.subscriptionTiers", "Subscription Tiers"),
    ("dashboard.subscriptionTiersCaption", "Active pricing plans"),
    ("dashboard.monthlyRevenue", "Monthly Revenue"),
    ("dashboard.monthlyRevenueCaption", "Current MRR"),
    ("dashboard.quickActions", "Quick Actions"),
    (
        "dashboard.quickActionsBody",
        "Get started by adding organizations, configuring subscription tiers, or viewing analytics.",
    ),
    ("dashboard.systemHealth", "System Health"),
    ("dashboard.health.database", "Database"),
    ("dashboard.health.api", "API"),
    ("dashboard.health.ai", "AI Services"),
    ("dashboard.health.healthy", "Healthy"),
    ("dashboard.health.operational", "Operational"),
    ("dashboard.health.active", "Active"),
    ("dashboard.recentOrganizations", "Recent Organizations"),
    ("dashboard.viewAll", "View all"),
    ("dashboard.column.name", "Name"),
    ("dashboard.column.tier", "Tier"),
    ("dashboard.column.status", "Status"),
    ("dashboard.column.created", "Created"),
    ("dashboard.notAvailable", "N/A"),
    (
        "dashboard.emptyRecent",
        "No organizations yet. Create your first organization to get started.",
    ),
    ("dashboard.status.active", "active"),
    ("dashboard.status.inactive", "inactive"),
    ("dashboard.status.pending", "pending"),
    ("dashboard.status.suspended", "suspended"),
    // Settings
    ("settings.title", "Settings"),
    (
        "settings.subtitle",
        "Configure global settings for the Jadarat ATS platform",
    ),
    ("settings.save", "Save Changes"),
    ("settings.saving", "Saving..."),
    ("settings.saved", "Settings saved successfully"),
    ("settings.saveFailed", "Failed to save settings"),
    ("settings.toggle.on", "On"),
    ("settings.toggle.off", "Off"),
    ("settings.section.general", "General Settings"),
    ("settings.section.general.description", "Basic platform configuration"),
    ("settings.section.security", "Security"),
    (
        "settings.section.security.description",
        "Authentication and security options",
    ),
    ("settings.section.localization", "Localization"),
    (
        "settings.section.localization.description",
        "Language and regional settings",
    ),
    ("settings.section.ai", "AI Configuration"),
    ("settings.section.ai.description", "AI service settings and features"),
    ("settings.section.notifications", "Notifications"),
    (
        "settings.section.notifications.description",
        "Email and integration settings",
    ),
    ("settings.section.integrations", "API & Integrations"),
    (
        "settings.section.integrations.description",
        "External service connections",
    ),
    ("settings.field.appName", "App Name (English)"),
    ("settings.field.appNameAr", "App Name (Arabic)"),
    ("settings.field.supportEmail", "Support Email"),
    ("settings.field.defaultLanguage", "Default Language"),
    ("settings.field.timezone", "Timezone"),
    ("settings.field.sessionTimeout", "Session Timeout (minutes)"),
    ("settings.field.maxLoginAttempts", "Max Login Attempts"),
    ("settings.field.enforceStrongPassword", "Enforce Strong Passwords"),
    (
        "settings.field.enforceStrongPassword.description",
        "Require complex passwords for all users",
    ),
    ("settings.field.require2FA", "Require Two-Factor Authentication"),
    (
        "settings.field.require2FA.description",
        "Enforce 2FA for all admin accounts",
    ),
    ("settings.field.aiProvider", "AI Provider"),
    ("settings.field.enableResumeParser", "AI Resume Parsing"),
    (
        "settings.field.enableResumeParser.description",
        "Automatically extract data from uploaded resumes",
    ),
    ("settings.field.enableAutoScoring", "AI Candidate Scoring"),
    (
        "settings.field.enableAutoScoring.description",
        "Automatically score candidates based on job requirements",
    ),
    ("settings.field.emailNotifications", "Email Notifications"),
    (
        "settings.field.emailNotifications.description",
        "Send system alerts via email",
    ),
    ("settings.field.slackIntegration", "Slack Integration"),
    (
        "settings.field.slackIntegration.description",
        "Send notifications to Slack channels",
    ),
    ("settings.field.webhookUrl", "Webhook URL (Optional)"),
    (
        "settings.field.webhookUrl.description",
        "Receive real-time notifications via webhook",
    ),
    ("settings.option.en", "English"),
    ("settings.option.ar", "Arabic (العربية)"),
    ("settings.option.Asia/Riyadh", "Riyadh (GMT+3)"),
    ("settings.option.Asia/Dubai", "Dubai (GMT+4)"),
    ("settings.option.Africa/Cairo", "Cairo (GMT+2)"),
    ("settings.option.UTC", "UTC"),
    ("settings.option.openai", "OpenAI GPT-4"),
    ("settings.option.anthropic", "Anthropic Claude"),
    ("settings.option.azure", "Azure OpenAI"),
    ("settings.localization.english", "English (EN)"),
    ("settings.localization.englishDirection", "Left-to-right layout"),
    ("settings.localization.arabic", "Arabic (العربية)"),
    ("settings.localization.arabicDirection", "Right-to-left layout"),
    ("settings.localization.default", "Default"),
    ("settings.localization.enabled", "Enabled"),
    ("settings.localization.regionalFormat", "Regional Format"),
    ("settings.localization.date", "Date: DD/MM/YYYY"),
    ("settings.localization.currency", "Currency: SAR"),
    ("settings.localization.number", "Number: 1,234.56"),
    ("settings.localization.weekStart", "Week Start: Sunday"),
    ("settings.integrations.emailService", "Email Service"),
    ("settings.integrations.resend", "Resend"),
    ("settings.integrations.database", "Database"),
    ("settings.integrations.supabase", "Supabase"),
    ("settings.integrations.cdn", "CDN & Storage"),
    ("settings.integrations.supabaseStorage", "Supabase Storage"),
    ("settings.integrations.connected", "Connected"),
];

const AR: &[(&str, &str)] = &[
    ("app.name", "جدارات"),
    // Login
    ("login.title", "مرحباً بعودتك"),
    ("login.description", "سجل دخولك إلى حساب جدارات"),
    ("login.email", "البريد الإلكتروني"),
    ("login.emailPlaceholder", "name@company.com"),
    ("login.password", "كلمة المرور"),
    ("login.signIn", "تسجيل الدخول"),
    ("login.signingIn", "جاري تسجيل الدخول..."),
    ("login.signedIn", "تم تسجيل الدخول"),
    ("login.noAccount", "ليس لديك حساب؟"),
    ("login.signUp", "سجل الآن"),
    ("login.forgotPassword", "نسيت كلمة المرور؟"),
    ("login.required", "سجل الدخول للمتابعة"),
    // Signup
    ("signup.title", "إنشاء حساب"),
    ("signup.description", "ابدأ مع جدارات"),
    ("signup.firstName", "الاسم الأول"),
    ("signup.lastName", "اسم العائلة"),
    ("signup.email", "البريد الإلكتروني"),
    ("signup.password", "كلمة المرور"),
    ("signup.confirmPassword", "تأكيد كلمة المرور"),
    ("signup.signUp", "إنشاء حساب"),
    ("signup.signingUp", "جاري إنشاء الحساب..."),
    ("signup.haveAccount", "لديك حساب بالفعل؟"),
    ("signup.signIn", "تسجيل الدخول"),
    ("signup.passwordMismatch", "كلمات المرور غير متطابقة"),
    ("signup.passwordTooShort", "يجب أن تكون كلمة المرور 8 أحرف على الأقل"),
    ("signup.successTitle", "تحقق من بريدك الإلكتروني"),
    (
        "signup.successMessage",
        "أرسلنا لك رابط تأكيد. يرجى التحقق من بريدك الإلكتروني لتفعيل حسابك.",
    ),
    // Dashboard
    ("dashboard.welcomeTitle", "مرحباً بك في جدارات"),
    (
        "dashboard.welcomeSubtitle",
        "نظام تتبع المتقدمين المدعوم بالذكاء الاصطناعي لمنطقة الشرق الأوسط وشمال أفريقيا",
    ),
    ("dashboard.totalOrganizations", "إجمالي المؤسسات"),
    ("dashboard.totalOrganizationsCaption", "المستأجرون النشطون على المنصة"),
    ("dashboard.activeUsers", "المستخدمون النشطون"),
    ("dashboard.activeUsersCaption", "عبر جميع المؤسسات"),
    ("dashboard.subscriptionTiers", "باقات الاشتراك"),
    ("dashboard.subscriptionTiersCaption", "خطط التسعير النشطة"),
    ("dashboard.monthlyRevenue", "الإيراد الشهري"),
    ("dashboard.monthlyRevenueCaption", "الإيراد الشهري المتكرر الحالي"),
    ("dashboard.quickActions", "إجراءات سريعة"),
    (
        "dashboard.quickActionsBody",
        "ابدأ بإضافة المؤسسات أو إعداد باقات الاشتراك أو عرض التحليلات.",
    ),
    ("dashboard.systemHealth", "حالة النظام"),
    ("dashboard.health.database", "قاعدة البيانات"),
    ("dashboard.health.api", "واجهة البرمجة"),
    ("dashboard.health.ai", "خدمات الذكاء الاصطناعي"),
    ("dashboard.health.healthy", "سليمة"),
    ("dashboard.health.operational", "تعمل"),
    ("dashboard.health.active", "نشطة"),
    ("dashboard.recentOrganizations", "أحدث المؤسسات"),
    ("dashboard.viewAll", "عرض الكل"),
    ("dashboard.column.name", "الاسم"),
    ("dashboard.column.tier", "الباقة"),
    ("dashboard.column.status", "الحالة"),
    ("dashboard.column.created", "تاريخ الإنشاء"),
    ("dashboard.notAvailable", "غير متوفر"),
    (
        "dashboard.emptyRecent",
        "لا توجد مؤسسات بعد. أنشئ مؤسستك الأولى للبدء.",
    ),
    ("dashboard.status.active", "نشطة"),
    ("dashboard.status.inactive", "غير نشطة"),
    ("dashboard.status.pending", "قيد الانتظار"),
    ("dashboard.status.suspended", "موقوفة"),
    // Settings
    ("settings.title", "الإعدادات"),
    ("settings.subtitle", "إعداد الإعدادات العامة لمنصة جدارات"),
    ("settings.save", "حفظ التغييرات"),
    ("settings.saving", "جاري الحفظ..."),
    ("settings.saved", "تم حفظ الإعدادات بنجاح"),
    ("settings.saveFailed", "فشل حفظ الإعدادات"),
    ("settings.toggle.on", "مفعّل"),
    ("settings.toggle.off", "معطّل"),
    ("settings.section.general", "الإعدادات العامة"),
    ("settings.section.general.description", "الإعدادات الأساسية للمنصة"),
    ("settings.section.security", "الأمان"),
    ("settings.section.security.description", "خيارات المصادقة والأمان"),
    ("settings.section.localization", "الترجمة والتوطين"),
    ("settings.section.localization.description", "إعدادات اللغة والمنطقة"),
    ("settings.section.ai", "إعدادات الذكاء الاصطناعي"),
    ("settings.section.ai.description", "إعدادات وميزات خدمة الذكاء الاصطناعي"),
    ("settings.section.notifications", "الإشعارات"),
    ("settings.section.notifications.description", "إعدادات البريد والتكامل"),
    ("settings.section.integrations", "الواجهات والتكاملات"),
    ("settings.section.integrations.description", "الاتصالات بالخدمات الخارجية"),
    ("settings.field.appName", "اسم التطبيق (بالإنجليزية)"),
    ("settings.field.appNameAr", "اسم التطبيق (بالعربية)"),
    ("settings.field.supportEmail", "بريد الدعم"),
    ("settings.field.defaultLanguage", "اللغة الافتراضية"),
    ("settings.field.timezone", "المنطقة الزمنية"),
    ("settings.field.sessionTimeout", "مهلة الجلسة (بالدقائق)"),
    ("settings.field.maxLoginAttempts", "الحد الأقصى لمحاولات الدخول"),
    ("settings.field.enforceStrongPassword", "فرض كلمات مرور قوية"),
    (
        "settings.field.enforceStrongPassword.description",
        "اشتراط كلمات مرور معقدة لجميع المستخدمين",
    ),
    ("settings.field.require2FA", "اشتراط المصادقة الثنائية"),
    (
        "settings.field.require2FA.description",
        "فرض المصادقة الثنائية لجميع حسابات المسؤولين",
    ),
    ("settings.field.aiProvider", "مزود الذكاء الاصطناعي"),
    ("settings.field.enableResumeParser", "تحليل السير الذاتية بالذكاء الاصطناعي"),
    (
        "settings.field.enableResumeParser.description",
        "استخراج البيانات تلقائياً من السير الذاتية المرفوعة",
    ),
    ("settings.field.enableAutoScoring", "تقييم المرشحين بالذكاء الاصطناعي"),
    (
        "settings.field.enableAutoScoring.description",
        "تقييم المرشحين تلقائياً بناءً على متطلبات الوظيفة",
    ),
    ("settings.field.emailNotifications", "إشعارات البريد الإلكتروني"),
    (
        "settings.field.emailNotifications.description",
        "إرسال تنبيهات النظام عبر البريد الإلكتروني",
    ),
    ("settings.field.slackIntegration", "التكامل مع Slack"),
    (
        "settings.field.slackIntegration.description",
        "إرسال الإشعارات إلى قنوات Slack",
    ),
    ("settings.field.webhookUrl", "رابط Webhook (اختياري)"),
    (
        "settings.field.webhookUrl.description",
        "استلام الإشعارات الفورية عبر Webhook",
    ),
    ("settings.option.en", "الإنجليزية (English)"),
    ("settings.option.ar", "العربية"),
    ("settings.option.Asia/Riyadh", "الرياض (GMT+3)"),
    ("settings.option.Asia/Dubai", "دبي (GMT+4)"),
    ("settings.option.Africa/Cairo", "القاهرة (GMT+2)"),
    ("settings.option.UTC", "التوقيت العالمي (UTC)"),
    ("settings.option.openai", "OpenAI GPT-4"),
    ("settings.option.anthropic", "Anthropic Claude"),
    ("settings.option.azure", "Azure OpenAI"),
    ("settings.localization.english", "الإنجليزية (EN)"),
    ("settings.localization.englishDirection", "تخطيط من اليسار إلى اليمين"),
    ("settings.localization.arabic", "العربية"),
    ("settings.localization.arabicDirection", "تخطيط من اليمين إلى اليسار"),
    ("settings.localization.default", "افتراضي"),
    ("settings.localization.enabled", "مفعّلة"),
    ("settings.localization.regionalFormat", "التنسيق الإقليمي"),
    ("settings.localization.date", "التاريخ: DD/MM/YYYY"),
    ("settings.localization.currency", "العملة: SAR"),
    ("settings.localization.number", "الأرقام: 1,234.56"),
    ("settings.localization.weekStart", "بداية الأسبوع: الأحد"),
    ("settings.integrations.emailService", "خدمة البريد الإلكتروني"),
    ("settings.integrations.resend", "Resend"),
    ("settings.integrations.database", "قاعدة البيانات"),
    ("settings.integrations.supabase", "Supabase"),
    ("settings.integrations.cdn", "شبكة التوزيع والتخزين"),
    ("settings.integrations.supabaseStorage", "Supabase Storage"),
    ("settings.integrations.connected", "متصل"),
];

static BUILTIN: Lazy<TranslationTable> = Lazy::new(|| {
    TranslationTable::from_entries(&[(Language::En, EN), (Language::Ar, AR)])
});

/// Immutable language → key → string mapping.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl TranslationTable {
    /// The tables compiled into the console.
    pub fn builtin() -> &'static TranslationTable {
        &BUILTIN
    }

    pub fn from_entries(entries: &[(Language, &'static [(&'static str, &'static str)])]) -> Self {
        let tables = entries
            .iter()
            .map(|(language, pairs)| (*language, pairs.iter().copied().collect()))
            .collect();
        Self { tables }
    }

    /// Looks up `key` for `language` without any fallback.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .copied()
    }

    /// Returns the sorted key set declared for `language`.
    pub fn keys(&self, language: Language) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .tables
            .get(&language)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}
