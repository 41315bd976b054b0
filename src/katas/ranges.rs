//! Integer-range compression.

/// Formats an ordered list of integers as a comma-separated string, writing
/// `a-b` for, and only for, every run of three or more consecutive values.
///
/// Runs of two stay as two individual entries (`1,2`, never `1-2`).
pub fn compress_ranges(nums: &[i64]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0;

    while i < nums.len() {
        // Length of the consecutive run starting at i.
        let mut end = i;
        while end + 1 < nums.len() && nums[end + 1] == nums[end] + 1 {
            end += 1;
        }

        if end - i >= 2 {
            parts.push(format!("{}-{}", nums[i], nums[end]));
        } else {
            for &n in &nums[i..=end] {
                parts.push(n.to_string());
            }
        }
        i = end + 1;
    }

    parts.join(",")
}
