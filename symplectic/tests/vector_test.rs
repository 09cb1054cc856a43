use gf2::{Bit, BitMatrix};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;
use symplectic::{
    QubitSelection, SymplecticError, SymplecticVector, commutes, concat, omega, replace_at, slice,
    symplectic_product, to_pauli_index_tuple, to_pauli_label, weight,
};

proptest! {
    #[test]
    fn weight_counts_non_identity_qubits(pauli in arbitrary_pauli(200)) {
        let qubit_count = pauli.qubit_count();
        let expected = (0..qubit_count)
            .filter(|&qubit| (pauli[qubit], pauli[qubit_count + qubit]) != (Bit::ZERO, Bit::ZERO))
            .count();
        assert_eq!(weight(&pauli, &[]), expected);
        assert_eq!(weight(&pauli, &[]), to_pauli_label(&pauli, false).chars().filter(|&label_char| label_char != 'I').count());
    }

    #[test]
    fn weight_skips_indices(pauli in arbitrary_pauli(200), skipped in prop::collection::vec(0..250usize, 0..20)) {
        let expected = (0..pauli.qubit_count())
            .filter(|qubit| !skipped.contains(qubit))
            .filter(|&qubit| pauli.pauli_index(qubit) != 0)
            .count();
        assert_eq!(weight(&pauli, &skipped), expected);
        let everything: Vec<usize> = (0..pauli.qubit_count()).collect();
        assert_eq!(weight(&pauli, &everything), 0);
    }

    #[test]
    fn label_and_index_tuple_agree(pauli in arbitrary_pauli(200)) {
        let label = to_pauli_label(&pauli, false);
        let indices = to_pauli_index_tuple(&pauli);
        assert_eq!(label.len(), pauli.qubit_count());
        assert_eq!(indices.len(), pauli.qubit_count());
        for (label_char, index) in label.chars().zip(indices) {
            assert_eq!(['I', 'X', 'Z', 'Y'][usize::from(index)], label_char);
        }
    }

    #[test]
    fn swapping_exchanges_only_x_and_z(pauli in arbitrary_pauli(200)) {
        let plain = to_pauli_label(&pauli, false);
        let swapped = to_pauli_label(&pauli, true);
        for (plain_char, swapped_char) in plain.chars().zip(swapped.chars()) {
            let expected = match plain_char {
                'X' => 'Z',
                'Z' => 'X',
                other => other,
            };
            assert_eq!(swapped_char, expected);
        }
    }

    #[test]
    fn label_parses_back(pauli in arbitrary_pauli(200)) {
        assert_eq!(pauli.to_string().parse::<SymplecticVector>().unwrap(), pauli);
    }

    #[test]
    fn slice_then_replace_restores(pauli in arbitrary_pauli(100), seed in any::<u64>(), fraction in 0.0..1.0f64) {
        let mut random_number_generator = StdRng::seed_from_u64(seed);
        let mut qubits: Vec<usize> = (0..pauli.qubit_count()).collect();
        qubits.shuffle(&mut random_number_generator);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        qubits.truncate((fraction * qubits.len() as f64) as usize);

        let sliced = slice(&pauli, qubits.clone()).unwrap();
        assert_eq!(sliced.qubit_count(), qubits.len());
        assert_eq!(replace_at(&qubits, &sliced, &pauli).unwrap(), pauli.clone());

        let cleared = replace_at(&qubits, &SymplecticVector::zeros(qubits.len()), &pauli).unwrap();
        assert_eq!(replace_at(&qubits, &sliced, &cleared).unwrap(), pauli);
    }

    #[test]
    fn slice_keeps_list_order(pauli in arbitrary_pauli(100), raw_qubits in prop::collection::vec(0..100usize, 0..30)) {
        prop_assume!(pauli.qubit_count() > 0);
        let qubits: Vec<usize> = raw_qubits.iter().map(|qubit| qubit % pauli.qubit_count()).collect();
        let sliced = slice(&pauli, qubits.as_slice()).unwrap();
        for (position, &qubit) in qubits.iter().enumerate() {
            assert_eq!(sliced.x(position), pauli.x(qubit));
            assert_eq!(sliced.z(position), pauli.z(qubit));
        }
    }

    #[test]
    fn slice_by_range_matches_indices(pauli in arbitrary_pauli(100), bounds in (0..100usize, 0..100usize)) {
        let qubit_count = pauli.qubit_count();
        let (start, stop) = (bounds.0.min(bounds.1) % (qubit_count + 1), bounds.0.max(bounds.1) % (qubit_count + 1));
        prop_assume!(start <= stop);
        let by_range = slice(&pauli, start..stop).unwrap();
        let by_indices = slice(&pauli, (start..stop).collect::<Vec<usize>>()).unwrap();
        assert_eq!(by_range, by_indices);
        assert_eq!(slice(&pauli, ..).unwrap(), pauli.clone());
        assert_eq!(slice(&pauli, start..).unwrap(), slice(&pauli, start..qubit_count).unwrap());
        assert_eq!(slice(&pauli, ..stop).unwrap(), slice(&pauli, 0..stop).unwrap());
    }

    #[test]
    fn concat_is_associative(a in arbitrary_pauli(50), b in arbitrary_pauli(50), c in arbitrary_pauli(50)) {
        let left = concat([&concat([&a, &b]), &c]);
        let right = concat([&a, &concat([&b, &c])]);
        assert_eq!(left, right.clone());
        assert_eq!(right, concat([&a, &b, &c]));
    }

    #[test]
    fn concat_places_x_parts_before_z_parts(a in arbitrary_pauli(50), b in arbitrary_pauli(50)) {
        let joined = concat([&a, &b]);
        assert_eq!(joined.qubit_count(), a.qubit_count() + b.qubit_count());
        assert_eq!(joined.to_string(), format!("{a}{b}"));
        assert_eq!(slice(&joined, 0..a.qubit_count()).unwrap(), a.clone());
        assert_eq!(slice(&joined, a.qubit_count()..).unwrap(), b);
    }

    #[test]
    fn symplectic_product_uses_omega((left, right) in equal_length_paulis(100)) {
        let form = omega(left.qubit_count());
        let mut expected = Bit::ZERO;
        for row in 0..left.len() {
            for column in 0..right.len() {
                expected += left[row] * form[(row, column)] * right[column];
            }
        }
        assert_eq!(symplectic_product(&left, &right).unwrap(), expected);
        assert_eq!(commutes(&left, &right).unwrap(), commutes(&right, &left).unwrap());
        assert!(commutes(&left, &left).unwrap());
    }
}

#[test]
fn weight_of_empty_vector_is_zero() {
    assert_eq!(weight(&SymplecticVector::zeros(0), &[]), 0);
    assert_eq!(weight(&"XYZ".parse().unwrap(), &[0, 1, 2, 7]), 0);
}

#[test]
fn labels() {
    let pauli: SymplecticVector = "IXZY".parse().unwrap();
    assert_eq!(pauli.bits(), SymplecticVector::from_bits([0u8, 1, 0, 1, 0, 0, 1, 1]).unwrap().bits());
    assert_eq!(to_pauli_label(&pauli, false), "IXZY");
    assert_eq!(to_pauli_label(&pauli, true), "IZXY");
    assert_eq!(to_pauli_index_tuple(&pauli), vec![0, 1, 2, 3]);
    assert_eq!(format!("{pauli:?}"), "SymplecticVector(IXZY)");
}

#[test]
fn omega_blocks() {
    assert_eq!(omega(0).shape(), (0, 0));
    assert_eq!(omega(1), "01|10".parse::<BitMatrix>().unwrap());
    let form = omega(3);
    for row in 0..6 {
        for column in 0..6 {
            assert_eq!(form[(row, column)].is_one(), row.abs_diff(column) == 3);
        }
    }
}

#[test]
fn construction_errors() {
    assert_eq!(SymplecticVector::from_bits([1u8, 0, 1]), Err(SymplecticError::OddLength(3)));
    assert_eq!(
        SymplecticVector::from_parts([true], [true, false]),
        Err(SymplecticError::QubitCountMismatch { left: 1, right: 2 })
    );
    assert_eq!(
        "XQ".parse::<SymplecticVector>(),
        Err(SymplecticError::InvalidPauliCharacter('Q'))
    );
    assert_eq!(
        SymplecticVector::from_parts([1u8, 0], [0u8, 1]).unwrap(),
        "XZ".parse::<SymplecticVector>().unwrap()
    );
}

#[test]
fn slice_rejects_bad_selections() {
    let pauli: SymplecticVector = "XYZ".parse().unwrap();
    assert_eq!(
        slice(&pauli, vec![0, 3]),
        Err(SymplecticError::InvalidIndex { index: 3, qubit_count: 3 })
    );
    assert_eq!(
        slice(&pauli, 1..4),
        Err(SymplecticError::InvalidRange {
            start: 1,
            stop: 4,
            qubit_count: 3
        })
    );
    assert_eq!(
        slice(&pauli, QubitSelection::Range { start: Some(2), stop: Some(1) }),
        Err(SymplecticError::InvalidRange {
            start: 2,
            stop: 1,
            qubit_count: 3
        })
    );
    assert!(slice(&pauli, Vec::<usize>::new()).unwrap().is_empty());
    assert!(slice(&pauli, 2..2).unwrap().is_empty());
}

#[test]
fn replace_at_rejects_short_operands_and_bad_indices() {
    let target: SymplecticVector = "IIII".parse().unwrap();
    let op: SymplecticVector = "X".parse().unwrap();
    assert_eq!(
        replace_at(&[0, 1], &op, &target),
        Err(SymplecticError::OperandTooShort { required: 4, actual: 2 })
    );
    assert_eq!(
        replace_at(&[4], &op, &target),
        Err(SymplecticError::InvalidIndex { index: 4, qubit_count: 4 })
    );
    assert_eq!(replace_at(&[], &op, &target).unwrap(), target);
}

#[test]
fn replace_at_reads_operand_positionally() {
    let target: SymplecticVector = "ZZZ".parse().unwrap();
    let op = SymplecticVector::from_bits([1u8, 1, 0, 0]).unwrap();
    assert_eq!(replace_at(&[2], &op, &target).unwrap().to_string(), "ZZY");
}

#[test]
fn concat_of_nothing_is_empty() {
    assert!(concat(std::iter::empty::<&SymplecticVector>()).is_empty());
}

#[test]
fn products_require_equal_sizes() {
    let left: SymplecticVector = "XX".parse().unwrap();
    let right: SymplecticVector = "X".parse().unwrap();
    assert_eq!(
        commutes(&left, &right),
        Err(SymplecticError::QubitCountMismatch { left: 2, right: 1 })
    );
}

prop_compose! {
   fn arbitrary_pauli(max_qubit_count: usize)(qubit_count in 0..max_qubit_count) -> SymplecticVector {
        random_pauli(qubit_count)
   }
}

prop_compose! {
   fn equal_length_paulis(max_qubit_count: usize)(qubit_count in 0..max_qubit_count) -> (SymplecticVector, SymplecticVector) {
        (random_pauli(qubit_count), random_pauli(qubit_count))
   }
}

fn random_pauli(qubit_count: usize) -> SymplecticVector {
    let bits = std::iter::repeat_with(|| thread_rng().r#gen::<bool>()).take(2 * qubit_count);
    SymplecticVector::from_bits(bits).expect("even length")
}
