/// Hash function names in the style of the harness output.
pub fn hash_names(count: usize) -> Vec<String> {
    (0..count).map(|x| format!("Hash function {x}")).collect()
}

/// A generated blocks record with `hash_count` hash functions, each reporting collisions
/// at `key_steps` doubling key counts.
pub fn generated_blocks_json(hash_count: usize, key_steps: u32) -> String {
    let collisions: Vec<String> = hash_names(hash_count)
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let counters: Vec<String> = (0..key_steps)
                .map(|step| format!(r#""{}": {}"#, 1u64 << step, (step as usize * index) / 3))
                .collect();
            format!(r#""{}": {{{}}}"#, name, counters.join(", "))
        })
        .collect();

    format!(
        r#"{{"Bits": 32, "Mask": 32, "Collisions": {{{}}}}}"#,
        collisions.join(", ")
    )
}

/// A fixed bucket record with `hash_count` hash functions.
pub fn data_collisions_json(hash_count: usize) -> String {
    let collisions: Vec<String> = hash_names(hash_count)
        .iter()
        .enumerate()
        .map(|(index, name)| format!(r#""{}": {}"#, name, index * 17))
        .collect();

    format!(
        r#"{{"Test name": "Words tests", "Bits": 16, "Collisions": {{{}}}}}"#,
        collisions.join(", ")
    )
}
