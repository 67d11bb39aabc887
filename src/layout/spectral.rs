use crate::graph::SourceGraph;
use crate::layout::{Point, rescale};

const MAX_SWEEPS: usize = 100;
const OFF_DIAGONAL_EPSILON: f64 = 1e-20;

/// Coordinates from the eigenvectors of the graph Laplacian belonging to the
/// second and third smallest eigenvalues.
pub fn layout(graph: &SourceGraph) -> Vec<Point> {
    let n = graph.node_count();
    match n {
        0 | 1 => return vec![Point::ORIGIN; n],
        2 => return vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)],
        _ => {}
    }

    let (values, vectors) = symmetric_eigen(laplacian(graph));
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]).then(a.cmp(&b)));

    let x = column(&vectors, order[1]);
    let y = column(&vectors, order[2]);
    let mut points: Vec<Point> = x.into_iter().zip(y).map(|(x, y)| Point::new(x, y)).collect();
    rescale(&mut points);
    points
}

/// Dense L = D - A; self-loops cancel out.
fn laplacian(graph: &SourceGraph) -> Vec<Vec<f64>> {
    let adjacency = graph.adjacency();
    let n = adjacency.len();
    let mut l = vec![vec![0.0; n]; n];
    for (i, neighbours) in adjacency.iter().enumerate() {
        l[i][i] = neighbours.len() as f64;
        for &j in neighbours {
            l[i][j] -= 1.0;
        }
    }
    l
}

/// Eigen-decomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Returns the eigenvalues and a matrix whose columns are the matching
/// eigenvectors.
fn symmetric_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    for _ in 0..MAX_SWEEPS {
        let off: f64 = (0..n)
            .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum();
        if off < OFF_DIAGONAL_EPSILON {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                if a[p][q].abs() < f64::MIN_POSITIVE {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
                let t = sign / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
                for k in 0..n {
                    let (pk, qk) = (a[p][k], a[q][k]);
                    a[p][k] = c * pk - s * qk;
                    a[q][k] = s * pk + c * qk;
                }
                for row in v.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
            }
        }
    }

    let values = (0..n).map(|i| a[i][i]).collect();
    (values, v)
}

/// One eigenvector, sign fixed so its largest-magnitude entry is positive.
/// Among entries tied on magnitude the first one decides.
fn column(vectors: &[Vec<f64>], index: usize) -> Vec<f64> {
    let mut col: Vec<f64> = vectors.iter().map(|row| row[index]).collect();
    let largest = col.iter().map(|x| x.abs()).fold(0.0, f64::max);
    if let Some(pivot) = col.iter().copied().find(|x| x.abs() >= largest - 1e-9) {
        if pivot < 0.0 {
            col.iter_mut().for_each(|x| *x = -*x);
        }
    }
    col
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::graph;

    #[test]
    fn jacobi_recovers_known_spectrum() {
        let (mut values, _) = symmetric_eigen(vec![
            vec![2.0, -1.0, 0.0],
            vec![-1.0, 2.0, -1.0],
            vec![0.0, -1.0, 2.0],
        ]);
        values.sort_by(f64::total_cmp);
        let expected = [2.0 - 2f64.sqrt(), 2.0, 2.0 + 2f64.sqrt()];
        for (got, want) in values.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }

    #[test]
    fn eigenvectors_satisfy_the_equation() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")], &[]);
        let l = laplacian(&g);
        let (values, vectors) = symmetric_eigen(l.clone());
        for (k, lambda) in values.iter().enumerate() {
            for i in 0..l.len() {
                let lv: f64 = (0..l.len()).map(|j| l[i][j] * vectors[j][k]).sum();
                assert!((lv - lambda * vectors[i][k]).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn path_is_ordered_along_the_fiedler_vector() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D")], &[]);
        let xs: Vec<f64> = layout(&g).iter().map(|p| p.x).collect();
        let increasing = xs.windows(2).all(|w| w[0] < w[1]);
        let decreasing = xs.windows(2).all(|w| w[0] > w[1]);
        assert!(increasing || decreasing, "{xs:?}");
    }

    #[test]
    fn largest_entry_decides_the_sign() {
        assert_eq!(column(&[vec![0.4], vec![-0.6]], 0), vec![-0.4, 0.6]);
        assert_eq!(column(&[vec![-0.6], vec![0.4]], 0), vec![0.6, -0.4]);
        // Tie on magnitude: the first entry wins.
        assert_eq!(column(&[vec![-0.5], vec![0.5]], 0), vec![0.5, -0.5]);
    }

    #[test]
    fn long_arm_of_a_branched_path_points_right() {
        // A-B-C-D-E with F hanging off B: E sits furthest along the Fiedler vector.
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("B", "F")], &[]);
        let (values, vectors) = symmetric_eigen(laplacian(&g));
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        let fiedler = column(&vectors, order[1]);
        let (largest, _) = fiedler
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
            .unwrap();
        assert_eq!(largest, 4, "{fiedler:?}");
        assert!(fiedler[4] > 0.0, "{fiedler:?}");

        let names = ["A", "B", "C", "D", "E", "F"];
        let xs: Vec<f64> = layout(&g).iter().map(|p| p.x).collect();
        assert_eq!(names[4], g.name(g.node_indices()[4]));
        assert!(xs.iter().all(|x| *x <= xs[4]), "{xs:?}");
        assert!(xs[0] < 0.0 && xs[5] < 0.0, "{xs:?}");
    }

    #[test]
    fn two_nodes_are_split_apart() {
        let g = graph(&[("A", "B")], &[]);
        assert_eq!(layout(&g), vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)]);
    }
}
