/*
[INPUT]:  Current page of tasks, sort order, and group-by key
[OUTPUT]: Sorted tasks partitioned into ordered display groups
[POS]:    Review workflow - pure sort/group engine
[UPDATE]: When grouping keys or ordering rules change
*/

use std::collections::BTreeMap;

use chrono::Datelike;
use taskdesk_client::Task;

/// Row ordering by creation timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "oldest first",
            SortOrder::Descending => "newest first",
        }
    }
}

/// Partition key for the current page of tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupBy {
    #[default]
    Year,
    Month,
    Department,
}

impl GroupBy {
    pub fn cycled(self) -> Self {
        match self {
            GroupBy::Year => GroupBy::Month,
            GroupBy::Month => GroupBy::Department,
            GroupBy::Department => GroupBy::Year,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Year => "year",
            GroupBy::Month => "month",
            GroupBy::Department => "department",
        }
    }
}

/// Stable sort by creation timestamp; ties keep their original order
pub fn sort_tasks(tasks: &[Task], order: SortOrder) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Descending => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    sorted
}

/// Group key for one task: `"YYYY"`, zero-padded `"YYYY-MM"`, or the
/// literal department name.
pub fn group_key(task: &Task, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Year => task.created_at.year().to_string(),
        GroupBy::Month => format!(
            "{:04}-{:02}",
            task.created_at.year(),
            task.created_at.month()
        ),
        GroupBy::Department => task.department_name.clone(),
    }
}

/// Partition an already-sorted page slice into ordered groups.
///
/// Date-shaped keys follow the row sort direction (lexicographic equals
/// chronological for this key format); department keys are always
/// ascending. Grouping never spans pages: the engine only sees the slice
/// the server returned for the current page.
pub fn group_tasks(
    tasks: Vec<Task>,
    group_by: GroupBy,
    order: SortOrder,
) -> Vec<(String, Vec<Task>)> {
    let mut groups: BTreeMap<String, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        groups.entry(group_key(&task, group_by)).or_default().push(task);
    }

    let mut keyed: Vec<(String, Vec<Task>)> = groups.into_iter().collect();
    if matches!(group_by, GroupBy::Year | GroupBy::Month) && order == SortOrder::Descending {
        keyed.reverse();
    }
    keyed
}

/// Display heading for one group
pub fn group_title(key: &str, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Year => format!("Tasks for {key}"),
        GroupBy::Month => match key.split_once('-') {
            Some((year, month)) => {
                let month = month.parse().map(month_name).unwrap_or("?");
                format!("Tasks for {month} {year}")
            }
            None => format!("Tasks for {key}"),
        },
        GroupBy::Department => format!("{key} department"),
    }
}

/// Month name for filter labels and month-group headings
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use taskdesk_client::TaskStatus;

    fn task(id: &str, department: &str, y: i32, m: u32, d: u32) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            link_url: "https://docs.example.com".to_string(),
            department_name: department.to_string(),
            status: TaskStatus::Pending,
            comment: None,
            created_at: Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap(),
            employee: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn descending_sort_is_exact_reverse_of_ascending() {
        let tasks = vec![
            task("a", "Sales", 2024, 3, 5),
            task("b", "Sales", 2023, 11, 1),
            task("c", "Sales", 2024, 1, 20),
        ];

        let asc = sort_tasks(&tasks, SortOrder::Ascending);
        let mut desc = sort_tasks(&tasks, SortOrder::Descending);
        desc.reverse();

        assert_eq!(ids(&asc), ids(&desc));
        assert_eq!(ids(&asc), vec!["b", "c", "a"]);
    }

    #[test]
    fn sort_keeps_original_order_on_equal_timestamps() {
        let tasks = vec![
            task("first", "Sales", 2024, 3, 5),
            task("second", "Sales", 2024, 3, 5),
            task("third", "Sales", 2024, 3, 5),
        ];

        let asc = sort_tasks(&tasks, SortOrder::Ascending);
        let desc = sort_tasks(&tasks, SortOrder::Descending);

        assert_eq!(ids(&asc), vec!["first", "second", "third"]);
        assert_eq!(ids(&desc), vec!["first", "second", "third"]);
    }

    #[test]
    fn month_keys_are_zero_padded() {
        let t = task("a", "Sales", 2024, 3, 5);
        assert_eq!(group_key(&t, GroupBy::Month), "2024-03");
        assert_eq!(group_key(&t, GroupBy::Year), "2024");
    }

    #[test]
    fn month_groups_follow_descending_sort_order() {
        let tasks = sort_tasks(
            &[
                task("a", "Sales", 2024, 3, 5),
                task("b", "Sales", 2023, 11, 1),
                task("c", "Sales", 2024, 1, 20),
                task("d", "Sales", 2024, 3, 9),
            ],
            SortOrder::Descending,
        );

        let groups = group_tasks(tasks, GroupBy::Month, SortOrder::Descending);
        let keys: Vec<&str> = groups.iter().map(|(key, _)| key.as_str()).collect();

        assert_eq!(keys, vec!["2024-03", "2024-01", "2023-11"]);
        for window in keys.windows(2) {
            assert!(window[0] > window[1], "keys must strictly decrease");
        }
        assert_eq!(ids(&groups[0].1), vec!["d", "a"]);
    }

    #[test]
    fn department_groups_are_always_ascending() {
        let tasks = vec![
            task("a", "Sales", 2024, 3, 5),
            task("b", "Creative", 2024, 3, 6),
            task("c", "Sales", 2024, 3, 7),
        ];

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let sorted = sort_tasks(&tasks, order);
            let groups = group_tasks(sorted, GroupBy::Department, order);
            let keys: Vec<&str> = groups.iter().map(|(key, _)| key.as_str()).collect();
            assert_eq!(keys, vec!["Creative", "Sales"]);
        }
    }

    #[test]
    fn group_titles_are_readable() {
        assert_eq!(group_title("2024", GroupBy::Year), "Tasks for 2024");
        assert_eq!(group_title("2024-03", GroupBy::Month), "Tasks for March 2024");
        assert_eq!(
            group_title("Sales", GroupBy::Department),
            "Sales department"
        );
    }
}
