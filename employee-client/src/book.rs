//! Employee Book - 列表与表单状态
//!
//! 持有员工列表和当前编辑记录。每次变更都等待服务端返回后整体刷新列表，
//! 不做乐观更新，也不做客户端校验。

use shared::models::{Employee, EmployeeDraft};

use crate::{ClientResult, EmployeeService};

/// 变更成功后的短暂提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    Updated,
    Deleted,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Saved => "Employee saved",
            Notice::Updated => "Employee updated",
            Notice::Deleted => "Employee deleted",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// 客户端状态
///
/// | 字段 | 说明 |
/// |------|------|
/// | employees | 最近一次刷新得到的列表 |
/// | selected | 表单绑定的记录; `id` 为空表示新建 |
pub struct EmployeeBook<S> {
    service: S,
    employees: Vec<Employee>,
    selected: EmployeeDraft,
}

impl<S: EmployeeService> EmployeeBook<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            employees: Vec::new(),
            selected: EmployeeDraft::blank(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn selected(&self) -> &EmployeeDraft {
        &self.selected
    }

    /// 表单双向绑定
    pub fn selected_mut(&mut self) -> &mut EmployeeDraft {
        &mut self.selected
    }

    /// 清空表单
    pub fn reset(&mut self) {
        self.selected = EmployeeDraft::blank();
    }

    /// 将记录载入表单
    pub fn edit(&mut self, employee: &Employee) {
        self.selected = EmployeeDraft::from(employee);
    }

    /// 拉取完整列表并覆盖本地副本
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.employees = self.service.list().await?;
        tracing::debug!(count = self.employees.len(), "Employee list refreshed");
        Ok(())
    }

    /// 提交表单: `id` 为空则新建，否则覆盖
    ///
    /// 失败时表单和列表保持不变。
    pub async fn submit(&mut self) -> ClientResult<Notice> {
        let input = self.selected.to_input();
        let notice = if self.selected.is_new() {
            let created = self.service.create(&input).await?;
            tracing::info!(id = %created.id, "Employee created");
            Notice::Saved
        } else {
            let id = self.selected.id.clone();
            self.service.replace(&id, &input).await?;
            tracing::info!(id = %id, "Employee updated");
            Notice::Updated
        };

        self.reset();
        self.refresh().await?;
        Ok(notice)
    }

    /// 删除记录; 未确认时不发出请求，返回 `None`
    pub async fn delete(&mut self, id: &str, confirm: bool) -> ClientResult<Option<Notice>> {
        if !confirm {
            return Ok(None);
        }

        self.service.delete(id).await?;
        tracing::info!(id = %id, "Employee deleted");

        self.refresh().await?;
        self.reset();
        Ok(Some(Notice::Deleted))
    }
}
