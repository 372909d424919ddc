//! A project's images travel as one comma-joined string in memory and as an
//! array column in the database. URLs must not contain literal commas.

pub fn split_image_urls(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_image_urls<S: AsRef<str>>(urls: &[S]) -> String {
    urls.iter()
        .map(|url| url.as_ref().trim())
        .filter(|url| !url.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
