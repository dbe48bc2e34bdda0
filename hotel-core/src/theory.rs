//! Static texts: menu labels, the theory screen, and the explanation shown
//! after each method.

/// One numbered room assignment method.
#[derive(Debug, Clone, Copy)]
pub struct MethodInfo {
    pub number: u8,
    pub menu_label: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub explanation: &'static str,
}

pub const METHODS: [MethodInfo; 8] = [
    MethodInfo {
        number: 1,
        menu_label: "New Visitor (shift: room n -> n+1)",
        title: "New Visitor",
        summary: "New Visitor: Shift each guest from room n to room n+1, freeing room 1.",
        explanation: "In an infinite hotel, even if every room is occupied, shifting each guest\n\
                      from room n to room n+1 frees up room 1 for a new guest.",
    },
    MethodInfo {
        number: 2,
        menu_label: "Infinite New Visitors (shift: room n -> 2*n)",
        title: "Infinite New Visitors",
        summary: "Infinite New Visitors: Shift each guest from room n to room 2*n, \
                  freeing odd-numbered rooms.",
        explanation: "By moving each guest from room n to room 2*n, all odd-numbered rooms become free.\n\
                      Since the set of odd numbers is infinite and countable, these freed rooms\n\
                      can be matched one-to-one with an infinite number of new guests.",
    },
    MethodInfo {
        number: 3,
        menu_label: "Prime Power Method",
        title: "Prime Power Method",
        summary: "Prime Power Method: Reassign guests into rooms numbered as powers of primes.",
        explanation: "Assigning rooms as powers of primes utilizes the uniqueness of prime factorizations.\n\
                      No two guests will receive the same room number because every integer\n\
                      has a unique prime factorization.",
    },
    MethodInfo {
        number: 4,
        menu_label: "Factorization Method",
        title: "Factorization Method",
        summary: "Factorization Method: Use the unique prime factorization (e.g., room = 2^n * 3^c).",
        explanation: "Using the unique factorization theorem, we assign a distinct room number\n\
                      by mapping the seat and bus numbers to exponents of distinct primes (2 and 3).",
    },
    MethodInfo {
        number: 5,
        menu_label: "Interleaving Method (by 3 digits)",
        title: "Interleaving Method (by 3 digits)",
        summary: "Interleaving Method: Alternate digits (in groups of three) of bus and seat numbers.",
        explanation: "By interleaving the digits of the bus and seat numbers (after padding them),\n\
                      a unique room number is generated that fills the hotel completely without gaps.",
    },
    MethodInfo {
        number: 6,
        menu_label: "Triangular Number Method",
        title: "Triangular Number Method",
        summary: "Triangular Number Method: Reassign guests to triangular numbers T(n)=n(n+1)/2;\n   \
                  for extra passengers, use T(c+n-1)+n.",
        explanation: "Triangular numbers are used here to reassign guests such that every room is filled.\n\
                      Additional passengers are assigned rooms based on a shifted triangular number sequence.",
    },
    MethodInfo {
        number: 7,
        menu_label: "Higher Infinity Method (ferry-bus-seat)",
        title: "Higher Infinity Method",
        summary: "Higher Infinity Method: For multi-level addresses (ferry-bus-seat), \
                  use room = 2^n * 3^c * 5^f.",
        explanation: "By extending the factorization method with an extra level (ferry) and using 5 as a prime,\n\
                      we can assign unique room numbers even for a three-dimensional infinite scenario.",
    },
    MethodInfo {
        number: 8,
        menu_label: "Binary Encoding Method",
        title: "Binary Encoding Method",
        summary: "Binary Encoding Method: Encode the guest address in binary, deleting one zero per group,\n   \
                  so that every room is uniquely occupied.",
        explanation: "This method encodes a guest's multi-level address into a binary number by creating\n\
                      groups of zeros (with one zero removed from each group) separated by ones. This ensures\n\
                      that every room gets uniquely assigned without gaps.",
    },
];

pub const THEORY_MENU_LABEL: &str = "View Theory";

/// The full theory screen.
pub fn theory_text() -> String {
    let mut text = String::from("=== Theory of the Grand Hotel Paradox ===\n");
    text.push_str("Imagine a hotel with an infinite number of rooms \u{2013} all are occupied.\n\n");
    for m in &METHODS {
        text.push_str(&format!("{}. {}\n", m.number, m.summary));
    }
    text.push_str(
        "\nThese methods illustrate that a countably infinite set can be put in one-to-one\n\
         correspondence with one of its proper subsets, defying our finite intuitions.\n",
    );
    text.push_str("===========================================\n");
    text
}
