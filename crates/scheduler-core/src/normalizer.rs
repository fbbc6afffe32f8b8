use chrono::NaiveDate;

use crate::dates::parse_date;
use crate::error::CoreError;
use crate::models::{NewTaskData, TaskDraft};
use crate::recurrence::{advance, RecurrenceRule};

/// Resolves a client draft into storable task data.
///
/// - an empty title is rejected;
/// - an empty date becomes `today`;
/// - a date before `today` is snapped to `today` for one-shot tasks, or
///   moved to the rule's first occurrence after `today` for recurring ones;
/// - any other date is kept as is.
pub fn normalize(draft: TaskDraft, today: NaiveDate) -> Result<NewTaskData, CoreError> {
    if draft.title.is_empty() {
        return Err(CoreError::EmptyTitle);
    }

    let mut date = if draft.date.is_empty() {
        today
    } else {
        parse_date(&draft.date)?
    };

    if date < today {
        date = if draft.repeat.is_empty() {
            today
        } else {
            let rule: RecurrenceRule = draft.repeat.parse()?;
            advance(rule, date, today)?
        };
    }

    Ok(NewTaskData {
        date,
        title: draft.title,
        comment: draft.comment,
        repeat: draft.repeat,
    })
}
