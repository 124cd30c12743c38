//! View model computation for [`Console`].
//!
//! Everything here is a pure read of the console state: localization, the
//! visible page, footer texts, and the dialog form.

use super::handler::Console;
use super::modes::DialogMode;
use crate::domain::{department_label_key, Employee, EmployeeStatus, Gender, DATE_FORMAT};
use crate::i18n::Locale;
use crate::ui::{ConsoleView, DialogView, FieldView, FooterInfo, HeaderInfo, NoticeView, RowView};
use chrono::NaiveDate;

impl Console {
    /// Computes the renderable view of the current state.
    #[must_use]
    pub fn view(&self) -> ConsoleView {
        let locale = self.context.locale;
        let rows = self.list.rows();
        let total = rows.len();
        let window = self.pager.window(total);

        let visible: Vec<RowView> = rows[window.clone()]
            .iter()
            .map(|row| RowView {
                id: row.id.clone(),
                name: row.name.clone(),
                start_date: format_date(row.start_date),
                status: status_label(locale, row.status),
                department: department_label(locale, &row.department_id),
                selected: self.list.is_selected(&row.id),
            })
            .collect();

        let from = if total == 0 { 0 } else { window.start + 1 };
        let selected = self.list.selection().len();
        let page_count = self.pager.page_count(total);

        let footer = FooterInfo {
            range: locale.format(
                "paginationDisplayedRows",
                &[
                    ("from", from.to_string()),
                    ("to", window.end.to_string()),
                    ("count", total.to_string()),
                ],
            ),
            visible: locale.format(
                "footerTotalVisibleRows",
                &[
                    ("visibleCount", visible.len().to_string()),
                    ("totalCount", total.to_string()),
                ],
            ),
            selected: (selected > 0)
                .then(|| locale.format("footerRowSelected", &[("count", selected.to_string())])),
            page_size: format!("{}: {}", locale.text("rowsPerPage"), self.pager.page_size()),
            page: self.pager.page().min(page_count - 1),
            page_count,
        };

        ConsoleView {
            header: HeaderInfo {
                title: locale.text("appTitle").to_string(),
                locale: locale.tag().to_string(),
            },
            busy: self
                .gate
                .is_busy()
                .then(|| locale.text("loading").to_string()),
            notice: self.notices.current().map(|notice| NoticeView {
                kind: notice.kind,
                message: notice.message.clone(),
            }),
            columns: [
                locale.text("employeeId").to_string(),
                locale.text("employeeName").to_string(),
                locale.text("startDate").to_string(),
                locale.text("status").to_string(),
                locale.text("employeeDepartment").to_string(),
            ],
            empty_state: visible
                .is_empty()
                .then(|| locale.text("noRows").to_string()),
            rows: visible,
            footer,
            dialog: self.dialog_view(locale),
        }
    }

    fn dialog_view(&self, locale: Locale) -> Option<DialogView> {
        let mode = self.dialog.mode()?;
        let payload = self.dialog.payload()?;
        let title = self.dialog.title(locale)?.to_string();

        Some(DialogView {
            title,
            mode,
            fields: form_fields(locale, mode, payload),
            confirm: mode
                .offers_confirm()
                .then(|| locale.text("confirm").to_string()),
            cancel: locale.text("cancel").to_string(),
        })
    }
}

fn form_fields(locale: Locale, mode: DialogMode, record: &Employee) -> Vec<FieldView> {
    let editable = mode.accepts_edits();
    let field = |key: &'static str, label: &str, value: String, editable: bool| FieldView {
        key,
        label: locale.text(label).to_string(),
        value,
        editable,
    };

    let gender = record.gender.map_or_else(String::new, |gender| {
        locale
            .text(match gender {
                Gender::Male => "genderMale",
                Gender::Female => "genderFemale",
            })
            .to_string()
    });

    vec![
        field("id", "employeeId", record.id.clone(), mode.id_editable()),
        field("name", "employeeName", record.name.clone(), editable),
        field(
            "departmentId",
            "employeeDepartment",
            department_label(locale, &record.department_id),
            editable,
        ),
        field("gender", "employeeGender", gender, editable),
        field("birth", "employeebirth", format_date(record.birth_date), editable),
        field("email", "employeeEmail", record.email.clone(), editable),
        field("startDate", "employeeStartDate", format_date(record.start_date), editable),
        field("phone", "employeePhone", record.phone.clone(), editable),
        field("status", "employeeStatus", status_label(locale, record.status), editable),
        field(
            "modifyBy",
            "employeeModifyBy",
            record.modified_by.clone().unwrap_or_default(),
            false,
        ),
        field(
            "modifyDate",
            "employeeModifyDate",
            record.modified_at.clone().unwrap_or_default(),
            false,
        ),
    ]
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn status_label(locale: Locale, status: Option<EmployeeStatus>) -> String {
    match status {
        Some(EmployeeStatus::Active) => locale.text("on").to_string(),
        Some(EmployeeStatus::Inactive) => locale.text("off").to_string(),
        None => String::new(),
    }
}

/// Localized department name, or the raw id when it is not in the catalogue.
fn department_label(locale: Locale, department_id: &str) -> String {
    department_label_key(department_id)
        .map_or_else(|| department_id.to_string(), |key| locale.text(key).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_ids_are_localized_when_known() {
        assert_eq!(department_label(Locale::En, "D002"), "IT");
        assert_eq!(department_label(Locale::Zh, "D999"), "D999");
    }

    #[test]
    fn detail_form_is_read_only() {
        let record = Employee {
            id: "E1".into(),
            gender: Some(Gender::Female),
            modified_by: Some("admin".into()),
            ..Employee::default()
        };
        let fields = form_fields(Locale::En, DialogMode::Detail, &record);

        assert!(fields.iter().all(|f| !f.editable));
        assert_eq!(fields[3].value, "Female");
        assert_eq!(fields[9].value, "admin");
    }

    #[test]
    fn create_form_unlocks_the_id() {
        let fields = form_fields(Locale::En, DialogMode::Create, &Employee::default());
        assert!(fields[0].editable);

        let fields = form_fields(Locale::En, DialogMode::Edit, &Employee::default());
        assert!(!fields[0].editable);
        assert!(fields[1].editable);
        assert!(!fields[10].editable);
    }
}
