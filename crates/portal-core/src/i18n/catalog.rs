//! Translation tables.
//!
//! Every [`TextKey`] has an entry in both languages; the exhaustive `match`
//! in [`zh`] and [`en`] is what guarantees it. Lookups by raw string key
//! (as used for keyed labels coming from templates or server data) go through
//! [`Catalog::lookup_str`] and return `None` for unknown keys.

use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString};

use super::language::Language;

/// A translation value: either fixed text or a one-argument formatter.
#[derive(Clone, Copy)]
pub enum Translation {
    Literal(&'static str),
    Template(fn(&str) -> String),
}

impl Translation {
    /// Renders the value. Templates are rendered with `arg`.
    pub fn render(&self, arg: &str) -> String {
        match self {
            Translation::Literal(text) => (*text).to_string(),
            Translation::Template(render) => render(arg),
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, Translation::Template(_))
    }
}

impl std::fmt::Debug for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Translation::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Translation::Template(_) => f.write_str("Template(..)"),
        }
    }
}

/// Keys of the UI string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TextKey {
    Brand,
    Subtitle,
    LoginTitle,
    LoginButton,
    LoginTip,
    SigningIn,
    LoginFailed,
    LoginSuccess,
    ModulesHeader,
    NavLogout,
    CardCta,
    QuickTasks,
    RunSelected,
    PickOne,
    Running,
    Done,
    Awaiting,
    AdminCreate,
    CreateUser,
    Username,
    Password,
    Department,
    Submitting,
    CreatedUser,
    NoPermission,
    LanguageToggle,
    DashboardSubtitle,
    LoadError,
    IntegrationCenter,
    IntegrationHint,
    FeatureHeader,
    FeatureHint,
    StatusReady,
    StatusInProgress,
    StatusPlanned,
    DocEditor,
    DocEditorHint,
    DocTitle,
    DocBody,
    DocCollaborators,
    DocCollaboratorsPlaceholder,
    SaveDocument,
    ChatSend,
    ChatSendHint,
    ChatChannel,
    ChatMessage,
    SendChat,
    LatestActivity,
    LatestActivityHint,
    Refresh,
    ExpenseForm,
    ExpenseFormHint,
    ExpenseType,
    ExpenseAmount,
    ExpenseDesc,
    SubmitExpense,
    ExpenseListHint,
    ApprovalForm,
    ApprovalFormHint,
    ApprovalType,
    ApprovalAmount,
    ApprovalReason,
    SubmitApproval,
    ApprovalListHint,
    FeedEmpty,
}

/// Read-only view of the string table for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Catalog {
    lang: Language,
}

impl Catalog {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn lookup(&self, key: TextKey) -> Translation {
        match self.lang {
            Language::Zh => zh(key),
            Language::En => en(key),
        }
    }

    /// Looks up a key given as a string. Unknown keys yield `None`.
    pub fn lookup_str(&self, key: &str) -> Option<Translation> {
        TextKey::from_str(key).ok().map(|key| self.lookup(key))
    }

    /// Display text for `key`; templates render with an empty argument.
    pub fn text(&self, key: TextKey) -> String {
        self.lookup(key).render("")
    }

    /// Display text for `key` with `arg` substituted into templates.
    pub fn format(&self, key: TextKey, arg: &str) -> String {
        self.lookup(key).render(arg)
    }
}

fn created_user_zh(user: &str) -> String {
    format!("已创建用户 {user}")
}

fn created_user_en(user: &str) -> String {
    format!("User {user} created")
}

fn zh(key: TextKey) -> Translation {
    use Translation::Literal as L;
    match key {
        TextKey::Brand => L("企业协同平台"),
        TextKey::Subtitle => L("统一门户 · 业务中心"),
        TextKey::LoginTitle => L("登录"),
        TextKey::LoginButton => L("登录"),
        TextKey::LoginTip => L("默认管理员：admin / admin"),
        TextKey::SigningIn => L("正在登录..."),
        TextKey::LoginFailed => L("登录失败"),
        TextKey::LoginSuccess => L("登录成功，跳转中..."),
        TextKey::ModulesHeader => L("可访问的模块"),
        TextKey::NavLogout => L("退出"),
        TextKey::CardCta => L("进入工作台"),
        TextKey::QuickTasks => L("快捷操作"),
        TextKey::RunSelected => L("执行所选任务"),
        TextKey::PickOne => L("请先选择至少一个任务"),
        TextKey::Running => L("执行中..."),
        TextKey::Done => L("完成"),
        TextKey::Awaiting => L("等待执行..."),
        TextKey::AdminCreate => L("管理员 · 创建用户并分配模块"),
        TextKey::CreateUser => L("创建用户"),
        TextKey::Username => L("用户名"),
        TextKey::Password => L("密码"),
        TextKey::Department => L("部门"),
        TextKey::Submitting => L("提交中..."),
        TextKey::CreatedUser => Translation::Template(created_user_zh),
        TextKey::NoPermission => L("无权限访问该模块。"),
        TextKey::LanguageToggle => L("中文 / English"),
        TextKey::DashboardSubtitle => L("模块导航与快捷入口"),
        TextKey::LoadError => L("数据加载失败"),
        TextKey::IntegrationCenter => L("功能集成中心"),
        TextKey::IntegrationHint => L("从导航快速切换模块，保持页面衔接顺畅"),
        TextKey::FeatureHeader => L("能力覆盖总览"),
        TextKey::FeatureHint => L("对照需求清单，查看当前进展"),
        TextKey::StatusReady => L("就绪"),
        TextKey::StatusInProgress => L("进行中"),
        TextKey::StatusPlanned => L("规划中"),
        TextKey::DocEditor => L("在线文档编辑"),
        TextKey::DocEditorHint => L("创建并保存一份实时协作文档，带协作者列表"),
        TextKey::DocTitle => L("标题"),
        TextKey::DocBody => L("正文"),
        TextKey::DocCollaborators => L("协作者"),
        TextKey::DocCollaboratorsPlaceholder => L("例如：小王、小李，逗号分隔"),
        TextKey::SaveDocument => L("保存并生成版本"),
        TextKey::ChatSend => L("发送群聊/会议消息"),
        TextKey::ChatSendHint => L("模拟 IM 或视频会议中的发言/共享"),
        TextKey::ChatChannel => L("频道"),
        TextKey::ChatMessage => L("消息内容"),
        TextKey::SendChat => L("发送"),
        TextKey::LatestActivity => L("最近动态"),
        TextKey::LatestActivityHint => L("展示刚刚提交的文档版本与聊天记录"),
        TextKey::Refresh => L("刷新"),
        TextKey::ExpenseForm => L("费用报销单"),
        TextKey::ExpenseFormHint => L("录入类别、金额与说明，并生成审批流"),
        TextKey::ExpenseType => L("报销类别"),
        TextKey::ExpenseAmount => L("金额"),
        TextKey::ExpenseDesc => L("说明"),
        TextKey::SubmitExpense => L("提交报销"),
        TextKey::ExpenseListHint => L("展示刚刚提交的报销及审批去向"),
        TextKey::ApprovalForm => L("提交流程单"),
        TextKey::ApprovalFormHint => L("模拟请假/报销/采购等审批提交流程"),
        TextKey::ApprovalType => L("流程类型"),
        TextKey::ApprovalAmount => L("金额/天数"),
        TextKey::ApprovalReason => L("事由"),
        TextKey::SubmitApproval => L("提交审批"),
        TextKey::ApprovalListHint => L("查看提交过的流程及下一步"),
        TextKey::FeedEmpty => L("暂无数据，提交一条看看效果"),
    }
}

fn en(key: TextKey) -> Translation {
    use Translation::Literal as L;
    match key {
        TextKey::Brand => L("Enterprise Platform"),
        TextKey::Subtitle => L("Unified portal · Business center"),
        TextKey::LoginTitle => L("Sign in"),
        TextKey::LoginButton => L("Sign in"),
        TextKey::LoginTip => L("Default admin: admin / admin"),
        TextKey::SigningIn => L("Signing in..."),
        TextKey::LoginFailed => L("Login failed"),
        TextKey::LoginSuccess => L("Success, redirecting..."),
        TextKey::ModulesHeader => L("Your modules"),
        TextKey::NavLogout => L("Logout"),
        TextKey::CardCta => L("Open workbench"),
        TextKey::QuickTasks => L("Quick actions"),
        TextKey::RunSelected => L("Run selected"),
        TextKey::PickOne => L("Choose at least one task"),
        TextKey::Running => L("Running..."),
        TextKey::Done => L("Done"),
        TextKey::Awaiting => L("Awaiting..."),
        TextKey::AdminCreate => L("Admin · create user & assign modules"),
        TextKey::CreateUser => L("Create user"),
        TextKey::Username => L("Username"),
        TextKey::Password => L("Password"),
        TextKey::Department => L("Department"),
        TextKey::Submitting => L("Submitting..."),
        TextKey::CreatedUser => Translation::Template(created_user_en),
        TextKey::NoPermission => L("No permission to access this module."),
        TextKey::LanguageToggle => L("中文 / English"),
        TextKey::DashboardSubtitle => L("Module navigation & quick links"),
        TextKey::LoadError => L("Failed to load data"),
        TextKey::IntegrationCenter => L("Integration Center"),
        TextKey::IntegrationHint => L("Jump between modules with shared context"),
        TextKey::FeatureHeader => L("Coverage overview"),
        TextKey::FeatureHint => L("Compare against the capability list"),
        TextKey::StatusReady => L("Ready"),
        TextKey::StatusInProgress => L("In progress"),
        TextKey::StatusPlanned => L("Planned"),
        TextKey::DocEditor => L("Document editor"),
        TextKey::DocEditorHint => L("Create a collaborative doc with versioning"),
        TextKey::DocTitle => L("Title"),
        TextKey::DocBody => L("Body"),
        TextKey::DocCollaborators => L("Collaborators"),
        TextKey::DocCollaboratorsPlaceholder => L("e.g. Alex, Jamie separated by comma"),
        TextKey::SaveDocument => L("Save document"),
        TextKey::ChatSend => L("Send chat/meeting message"),
        TextKey::ChatSendHint => L("Simulate IM or meeting posts"),
        TextKey::ChatChannel => L("Channel"),
        TextKey::ChatMessage => L("Message"),
        TextKey::SendChat => L("Send"),
        TextKey::LatestActivity => L("Recent activity"),
        TextKey::LatestActivityHint => L("See submitted versions and chats"),
        TextKey::Refresh => L("Refresh"),
        TextKey::ExpenseForm => L("Expense claim"),
        TextKey::ExpenseFormHint => L("Enter category, amount, and description"),
        TextKey::ExpenseType => L("Type"),
        TextKey::ExpenseAmount => L("Amount"),
        TextKey::ExpenseDesc => L("Description"),
        TextKey::SubmitExpense => L("Submit expense"),
        TextKey::ExpenseListHint => L("Latest submissions and routing"),
        TextKey::ApprovalForm => L("Workflow form"),
        TextKey::ApprovalFormHint => L("Submit leave/expense/procurement requests"),
        TextKey::ApprovalType => L("Type"),
        TextKey::ApprovalAmount => L("Amount/Days"),
        TextKey::ApprovalReason => L("Reason"),
        TextKey::SubmitApproval => L("Submit"),
        TextKey::ApprovalListHint => L("Previously submitted flows"),
        TextKey::FeedEmpty => L("No data yet, submit one to see results"),
    }
}
