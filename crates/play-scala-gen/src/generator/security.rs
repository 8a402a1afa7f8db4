use crate::generator::ast::{SchemeCategory, SecurityRequirement};

/// Filters an operation's security requirements for rendering.
///
/// When `remove_oauth` is set, OAuth entries are dropped (relative order of
/// the rest preserved) and the `is_last` adjacency flags are recomputed.
/// A list that becomes empty is returned as `None`: downstream templates
/// must render "no security" rather than an empty security array.
pub fn filter_security(
  requirements: Vec<SecurityRequirement>,
  remove_oauth: bool,
) -> Option<Vec<SecurityRequirement>> {
  if !remove_oauth {
    return Some(requirements);
  }

  let mut kept: Vec<SecurityRequirement> = requirements
    .into_iter()
    .filter(|requirement| requirement.category != SchemeCategory::OAuth)
    .collect();

  if kept.is_empty() {
    return None;
  }

  let last = kept.len() - 1;
  for (index, requirement) in kept.iter_mut().enumerate() {
    requirement.is_last = index == last;
  }

  Some(kept)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_requirements() -> Vec<SecurityRequirement> {
    vec![
      SecurityRequirement::new("api_key", SchemeCategory::ApiKey),
      SecurityRequirement::new("petstore_auth", SchemeCategory::OAuth),
      SecurityRequirement::new("basic_auth", SchemeCategory::Basic),
    ]
  }

  #[test]
  fn test_passthrough_when_oauth_allowed() {
    let requirements = sample_requirements();
    let filtered = filter_security(requirements.clone(), false).unwrap();
    assert_eq!(filtered, requirements);
  }

  #[test]
  fn test_removes_oauth_and_recomputes_adjacency() {
    let filtered = filter_security(sample_requirements(), true).unwrap();

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].scheme_name, "api_key");
    assert_eq!(filtered[1].scheme_name, "basic_auth");
    assert!(!filtered[0].is_last);
    assert!(filtered[1].is_last);
  }

  #[test]
  fn test_all_oauth_list_becomes_absent() {
    let requirements = vec![
      SecurityRequirement::new("oauth_a", SchemeCategory::OAuth),
      SecurityRequirement::new("oauth_b", SchemeCategory::OAuth),
    ];
    assert!(filter_security(requirements, true).is_none());
  }

  #[test]
  fn test_single_survivor_is_marked_last() {
    let requirements = vec![
      SecurityRequirement::new("petstore_auth", SchemeCategory::OAuth),
      SecurityRequirement::new("api_key", SchemeCategory::ApiKey),
    ];
    let filtered = filter_security(requirements, true).unwrap();
    assert_eq!(filtered.len(), 1);
    assert!(filtered[0].is_last);
  }
}
