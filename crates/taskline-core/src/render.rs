use crate::task::Task;

pub const BANNER: &str = "\
*********************************
* Welcome, these are the commands:
* To add a task: type its title
* To edit: /e -id=3 -title=\"New Title\" -completed=true
* To list tasks: /l
* To delete a task: /d -id=2
* To quit: /q
*********************************";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

pub fn task_list(tasks: &[Task], format: ListFormat) -> Result<String, serde_json::Error> {
    match format {
        ListFormat::Text => {
            let mut out = String::from("Your tasks:");
            for task in tasks {
                out.push_str("\n  ");
                out.push_str(&task.line());
            }
            Ok(out)
        }
        ListFormat::Json => serde_json::to_string_pretty(tasks),
    }
}

pub fn updated(task: &Task) -> String {
    format!("Task {} updated successfully", task.id)
}

pub fn deleted(task: &Task) -> String {
    format!("Deleted id {} successfully", task.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_list_has_header_and_indented_lines() {
        let mut done = Task::new(2, "Ship it");
        done.completed = true;
        let tasks = vec![Task::new(1, "Write tests"), done];
        let text = task_list(&tasks, ListFormat::Text).expect("render");
        assert_eq!(
            text,
            "Your tasks:\n  [1] Write tests (completed=false)\n  [2] Ship it (completed=true)"
        );
    }

    #[test]
    fn json_list_includes_created_at() {
        let tasks = vec![Task::new(7, "Call back")];
        let json = task_list(&tasks, ListFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value[0]["id"], 7);
        assert_eq!(value[0]["title"], "Call back");
        assert_eq!(value[0]["completed"], false);
        assert!(value[0]["created_at"].is_string());
    }
}
