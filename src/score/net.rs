use crate::HOLES;

#[must_use]
pub fn net_score(gross: Option<i32>, allocated_strokes: i32) -> Option<i32> {
    gross.map(|g| g - allocated_strokes)
}

/// Net strokes per hole; unplayed holes stay unplayed.
#[must_use]
pub fn net_scores(gross: &[Option<i32>; HOLES], strokes: &[i32; HOLES]) -> [Option<i32>; HOLES] {
    let mut net = [None; HOLES];
    for (hole, slot) in net.iter_mut().enumerate() {
        *slot = net_score(gross[hole], strokes[hole]);
    }
    net
}
