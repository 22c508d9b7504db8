//! Textbook in-place sorts.

pub fn bubble_sort<T: Ord>(s: &mut [T]) {
    let mut unsorted = s.len();
    while unsorted > 1 {
        let mut swapped = false;
        for inner in 1..unsorted {
            if s[inner - 1] > s[inner] {
                s.swap(inner - 1, inner);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        // the largest element of the pass has bubbled to the end
        unsorted -= 1;
    }
}

pub fn selection_sort<T: Ord>(s: &mut [T]) {
    for current in 0..s.len() {
        let min = (current..s.len())
            .min_by(|&a, &b| s[a].cmp(&s[b]))
            .unwrap_or(current);
        s.swap(current, min);
    }
}

pub fn insertion_sort<T: Ord>(s: &mut [T]) {
    for i in 1..s.len() {
        let mut j = i;
        while j > 0 && s[j - 1] > s[j] {
            s.swap(j - 1, j);
            j -= 1;
        }
    }
}
