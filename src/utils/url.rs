/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

/// Joins a base URL and path segments with exactly one `/` between parts
///
/// The base loses its trailing slashes, every segment loses its leading and
/// trailing slashes, and empty segments are skipped, so
/// `url_for("http://host/", &["/bundle/", "abc"])` and
/// `url_for("http://host", &["bundle", "/abc"])` both give
/// `http://host/bundle/abc`.
///
/// Slashes inside a segment are kept: `"/ga4gh/drs/v1/objects"` stays a
/// multi-level path.
pub fn url_for<S: AsRef<str>>(base: &str, segments: &[S]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.as_ref().trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    url
}
