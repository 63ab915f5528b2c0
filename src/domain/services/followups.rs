#[cfg(test)]
#[path = "followups_test.rs"]
mod tests;

// The analysis service embeds its follow-up question at the tail of the
// description, delimited by runs of `!` characters. The question has to be
// pulled out of the raw text first: cleaning destroys the delimiter.

/// Removes every maximal run of 3 or more consecutive `!`. Shorter runs are
/// legitimate punctuation and stay. Idempotent, since text on either side of
/// a removed run never starts or ends with `!`.
pub fn clean_description(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut run = 0;

    for c in raw.chars() {
        if c == '!' {
            run += 1;
            continue;
        }
        if run > 0 && run < 3 {
            out.extend(std::iter::repeat('!').take(run));
        }
        run = 0;
        out.push(c);
    }
    if run > 0 && run < 3 {
        out.extend(std::iter::repeat('!').take(run));
    }

    return out;
}

/// Extracts the follow-up question: the last segment of text terminated by a
/// `!` run, trimmed of non-alphanumeric characters at both ends except for a
/// trailing `?`. Returns None when the text carries no `!` at all.
pub fn extract_question(raw: &str) -> Option<String> {
    let last_bang = raw.rfind('!')?;

    // Walk back over the final `!` run to find where the question text ends.
    let mut run_start = last_bang;
    while run_start > 0 && raw.as_bytes()[run_start - 1] == b'!' {
        run_start -= 1;
    }

    let head = &raw[..run_start];
    let segment_start = head.rfind('!').map(|idx| return idx + 1).unwrap_or(0);
    let segment = &head[segment_start..];

    let mut question = segment
        .trim_start_matches(|c: char| return !c.is_alphanumeric())
        .to_string();
    while question
        .chars()
        .last()
        .is_some_and(|c| return !c.is_alphanumeric() && c != '?')
    {
        question.pop();
    }

    if question.is_empty() {
        return None;
    }
    return Some(question);
}

/// The body shown to the user: the cleaned description with the extracted
/// question removed. With no question present this is exactly
/// `clean_description`.
pub fn strip_body(raw: &str) -> String {
    let cleaned = clean_description(raw);
    let question = match extract_question(raw) {
        Some(question) => question,
        None => return cleaned,
    };

    match cleaned.rfind(&question) {
        Some(idx) => {
            let mut body = String::new();
            body.push_str(&cleaned[..idx]);
            body.push_str(&cleaned[idx + question.len()..]);
            return body
                .trim_matches(|c: char| return c == '!' || c.is_whitespace())
                .to_string();
        }
        None => return cleaned,
    }
}

/// (body, follow-up question) in one pass over the raw description.
pub fn interpret(raw: &str) -> (String, Option<String>) {
    return (strip_body(raw), extract_question(raw));
}
