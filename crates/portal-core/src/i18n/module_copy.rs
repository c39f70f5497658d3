//! Page header copy for module workbenches.

use super::catalog::{Catalog, TextKey};
use super::language::Language;

/// Title and description shown at the top of a module page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCopy {
    pub title: String,
    pub description: String,
}

/// Returns the header copy for a module key, or `None` for unknown modules.
pub fn module_copy(key: &str, lang: Language) -> Option<ModuleCopy> {
    if key == "dashboard" {
        let title = match lang {
            Language::Zh => "驾驶舱",
            Language::En => "Dashboard",
        };
        return Some(ModuleCopy {
            title: title.to_string(),
            description: Catalog::new(lang).text(TextKey::DashboardSubtitle),
        });
    }

    let (zh, en) = match key {
        "office" => (
            ("办公套件", "文档协作、即时沟通与日程共享"),
            ("Office Suite", "Document collaboration, messaging and shared calendars"),
        ),
        "oa" => (
            ("流程与行政", "审批、公告、公文与行政流程"),
            ("Workflow & Admin", "Approvals, bulletins, official documents and admin flows"),
        ),
        "finance" => (
            ("财务工作台", "费用报销、总账预算与应收应付"),
            ("Finance Workbench", "Expenses, ledger, budgets, receivables and payables"),
        ),
        "iam" => (
            ("身份与安全", "账号、权限、审计与安全策略"),
            ("IAM & Security", "Accounts, permissions, audit and security policy"),
        ),
        "integration" => (
            ("集成与网关", "API、消息与数据同步"),
            ("Integration", "APIs, messaging and data sync"),
        ),
        "hrm" => (("人力资源", "员工、考勤、薪酬"), ("HRM", "Employees, attendance, payroll")),
        "supply" => (
            ("供应链", "采购、仓储、物流"),
            ("Supply Chain", "Procurement, warehousing, logistics"),
        ),
        "project" => (
            ("项目管理", "里程碑、进度与成本"),
            ("Project", "Milestones, progress and cost"),
        ),
        "crm" => (
            ("客户与工单", "客户关系与客服工单"),
            ("CRM & Tickets", "Customer relations and support tickets"),
        ),
        "knowledge" => (
            ("知识与学习", "知识库与培训"),
            ("Knowledge & Learning", "Knowledge base and training"),
        ),
        "mobile" => (
            ("门户与移动", "移动门户与审批"),
            ("Portal & Mobile", "Mobile portal and approvals"),
        ),
        "itsm" => (("运维与BI", "IT 服务与报表"), ("ITSM & BI", "IT services and reporting")),
        "developer" => (
            ("开发者平台", "低代码与扩展"),
            ("Developer", "Low-code and extensions"),
        ),
        "asset" => (
            ("资产中心", "资产与库存管理"),
            ("Asset", "Asset and inventory management"),
        ),
        _ => return None,
    };

    let (title, description) = match lang {
        Language::Zh => zh,
        Language::En => en,
    };
    Some(ModuleCopy {
        title: title.to_string(),
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_module() {
        let copy = module_copy("finance", Language::Zh).unwrap();
        assert_eq!(copy.title, "财务工作台");
        let copy = module_copy("finance", Language::En).unwrap();
        assert_eq!(copy.title, "Finance Workbench");
    }

    #[test]
    fn test_dashboard_uses_catalog_subtitle() {
        let copy = module_copy("dashboard", Language::En).unwrap();
        assert_eq!(copy.description, "Module navigation & quick links");
    }

    #[test]
    fn test_unknown_module_has_no_copy() {
        assert!(module_copy("payroll-v2", Language::En).is_none());
    }
}
