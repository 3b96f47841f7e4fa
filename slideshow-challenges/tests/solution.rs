use slideshow_challenges::{calc_score, Instance, Slide, SlideshowError, Solution};

const EXAMPLE: &str = "4
H 3 cat beach sun
V 2 selfie smile
V 2 garden selfie
H 2 garden cat
";

fn example() -> Instance {
    Instance::parse("a_example.txt", EXAMPLE).unwrap()
}

fn slides(instance: &Instance, groups: &[&[usize]]) -> Vec<Slide> {
    groups
        .iter()
        .map(|ids| instance.slide(ids).unwrap())
        .collect()
}

fn classify(err: &anyhow::Error) -> SlideshowError {
    SlideshowError::classify(err).cloned().unwrap()
}

#[test]
fn test_calc_score() {
    let instance = example();
    assert_eq!(calc_score(&slides(&instance, &[&[0], &[3], &[1, 2]])), 2);
    assert_eq!(calc_score(&slides(&instance, &[&[0], &[1, 2], &[3]])), 1);
    assert_eq!(calc_score(&slides(&instance, &[&[0]])), 0);
    assert_eq!(calc_score(&[]), 0);
}

#[test]
fn test_from_slides_validates_score() {
    let instance = example();
    let ordered = slides(&instance, &[&[0], &[3], &[1, 2]]);
    let solution = Solution::from_slides(&instance.name, ordered.clone(), None).unwrap();
    assert_eq!(solution.score, 2);
    assert!(Solution::from_slides(&instance.name, ordered.clone(), Some(2)).is_ok());

    let err = Solution::from_slides(&instance.name, ordered, Some(5)).unwrap_err();
    assert_eq!(
        classify(&err),
        SlideshowError::ScoreMismatch {
            expected: 5,
            actual: 2
        }
    );
}

#[test]
fn test_add_slide_accumulates_score() {
    let instance = example();
    let mut solution = Solution::new(&instance.name);
    for slide in slides(&instance, &[&[0], &[3], &[1, 2]]) {
        solution.add_slide(slide);
    }
    assert_eq!(solution.score, 2);
    assert_eq!(solution.score, solution.calc_score());
    assert!(solution.verify_score().is_ok());

    solution.score += 1;
    assert!(matches!(
        classify(&solution.verify_score().unwrap_err()),
        SlideshowError::ScoreMismatch { .. }
    ));
}

#[test]
fn test_write_format() {
    let instance = example();
    let solution =
        Solution::from_slides(&instance.name, slides(&instance, &[&[0], &[3], &[1, 2]]), None)
            .unwrap();
    let mut buffer = Vec::new();
    solution.write(&mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "3\n0\n3\n1 2\n");
    assert_eq!(solution.to_string(), "3\n0\n3\n1 2\n");
}

#[test]
fn test_write_then_read() {
    let instance = example();
    let solution =
        Solution::from_slides(&instance.name, slides(&instance, &[&[3], &[2, 1], &[0]]), None)
            .unwrap();
    let written = solution.to_string();
    let reloaded = Solution::read(written.as_bytes(), &instance, Some(solution.score)).unwrap();
    assert_eq!(reloaded.slides, solution.slides);
    assert_eq!(reloaded.score, solution.score);
    assert_eq!(reloaded.instance_name, "a_example.txt");
    assert_eq!(instance.verify_solution(&reloaded).unwrap(), solution.score);
}

#[test]
fn test_read_errors() {
    let instance = example();
    let read = |text: &str| classify(&Solution::read(text.as_bytes(), &instance, None).unwrap_err());

    assert!(matches!(read("x\n0\n"), SlideshowError::MalformedInput(_)));
    assert!(matches!(read("2\n0\n"), SlideshowError::MalformedInput(_)));
    assert!(matches!(read("1\n9\n"), SlideshowError::MalformedInput(_)));
    assert!(matches!(read("1\n0 a\n"), SlideshowError::MalformedInput(_)));
    assert!(matches!(read("1\n\n"), SlideshowError::MalformedInput(_)));
    assert!(matches!(read("1\n1 2 0\n"), SlideshowError::MalformedInput(_)));
    assert!(matches!(read("1\n1\n"), SlideshowError::InvariantViolation(_)));
    assert!(matches!(read("1\n0 3\n"), SlideshowError::InvariantViolation(_)));
    assert!(matches!(read("2\n0\n0\n"), SlideshowError::InvariantViolation(_)));
    assert!(matches!(read("2\n1 2\n2 1\n"), SlideshowError::InvariantViolation(_)));

    let err = Solution::read("3\n0\n3\n1 2\n".as_bytes(), &instance, Some(3)).unwrap_err();
    assert_eq!(
        classify(&err),
        SlideshowError::ScoreMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_verify_solution() {
    let instance = example();
    let mut solution =
        Solution::from_slides(&instance.name, slides(&instance, &[&[0], &[3], &[1, 2]]), None)
            .unwrap();
    assert_eq!(instance.verify_solution(&solution).unwrap(), 2);

    solution.score = 7;
    assert!(matches!(
        classify(&instance.verify_solution(&solution).unwrap_err()),
        SlideshowError::ScoreMismatch { .. }
    ));

    solution.slides.push(instance.slide(&[0]).unwrap());
    solution.score = solution.calc_score();
    assert!(matches!(
        classify(&instance.verify_solution(&solution).unwrap_err()),
        SlideshowError::InvariantViolation(_)
    ));
}

#[test]
fn test_stats() {
    let instance = example();
    let solution =
        Solution::from_slides(&instance.name, slides(&instance, &[&[0], &[3], &[1, 2]]), None)
            .unwrap();
    assert_eq!(solution.interests().collect::<Vec<u32>>(), vec![1, 1]);
    assert_eq!(solution.slide_tag_counts().collect::<Vec<usize>>(), vec![3, 2, 3]);
    assert_eq!(solution.vertical_slides().count(), 1);
    assert_eq!(solution.vertical_slide_tag_counts().collect::<Vec<usize>>(), vec![3]);

    let stats = solution.stats();
    assert_eq!(stats.score, 2);
    assert_eq!(stats.num_slides, 3);
    assert_eq!(stats.num_vertical_slides, 1);
    assert_eq!(stats.interest_histogram.get(&1), Some(&2));
    assert_eq!(stats.tag_count_histogram.get(&3), Some(&2));
    assert_eq!(stats.tag_count_histogram.get(&2), Some(&1));
    assert_eq!(stats.vertical_tag_count_histogram.get(&3), Some(&1));
}
