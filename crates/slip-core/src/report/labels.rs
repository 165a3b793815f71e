//! Default report headers and column priority.

use lazy_static::lazy_static;

use crate::models::canonical::keys;

/// Display header for each canonical key, as printed in the report.
pub const DEFAULT_COLUMN_LABELS: [(&str, &str); 11] = [
    (keys::FINAL_DEBIT_BANK, "ΤΡΑΠΕΖΑ (ΧΡΕΩΣΗ)"),
    (keys::FINAL_CREDIT_BANK, "ΤΡΑΠΕΖΑ (ΠΙΣΤΩΣΗ)"),
    (keys::TRANSACTION_ID, "ΚΩΔΙΚΟΣ ΣΥΝΑΛΛΑΓΗΣ"),
    (keys::DATE, "ΗΜ/ΝΙΑ"),
    (keys::AMOUNT, "ΠΟΣΟ"),
    (keys::CHARGES, "ΕΞΟΔΑ"),
    (keys::SENDER_IBAN, "ΙΒΑΝ ΧΡΕΩΣΗΣ (ΑΠΟ)"),
    (keys::RECIPIENT_IBAN, "ΙΒΑΝ ΠΙΣΤΩΣΗΣ (ΠΡΟΣ)"),
    (keys::BENEFICIARY_NAME, "ΔΙΚΑΙΟΥΧΟΣ ΛΟΓΑΡΙΑΣΜΟΥ ΠΙΣΤΩΣΗΣ"),
    (keys::SAME_BANK_CHECK, "ΙΔΙΑ ΤΡΑΠΕΖΑ;"),
    (keys::FILENAME, "ΟΝΟΜΑ ΑΡΧΕΙΟΥ"),
];

lazy_static! {
    /// Preferred column order: headers of the fixed fields, then labels that
    /// recur across the slips of the domestic banks.
    pub static ref DEFAULT_PRIORITY_COLUMNS: Vec<&'static str> = vec![
        "ΤΡΑΠΕΖΑ (ΧΡΕΩΣΗ)", "ΚΩΔΙΚΟΣ ΣΥΝΑΛΛΑΓΗΣ", "ΗΜ/ΝΙΑ", "ΠΟΣΟ", "ΕΞΟΔΑ",
        "ΙΒΑΝ ΧΡΕΩΣΗΣ (ΑΠΟ)", "ΙΒΑΝ ΠΙΣΤΩΣΗΣ (ΠΡΟΣ)", "ΤΡΑΠΕΖΑ (ΠΙΣΤΩΣΗ)",
        "ΔΙΚΑΙΟΥΧΟΣ ΛΟΓΑΡΙΑΣΜΟΥ ΠΙΣΤΩΣΗΣ", "ΙΔΙΑ ΤΡΑΠΕΖΑ;", "ΟΝΟΜΑ ΑΡΧΕΙΟΥ",
        "Ώρα καταχωρήσεως", "Όνομα παραλήπτριας τραπέζης", "Έξοδα",
        "Επιβάρυνση για τραπεζικά έξοδα δικαιούχου", "Συνολικό ποσό αγορών/χρεώσεων",
        "Ημ/νία μεταφοράς", "Στοιχεία εντολέα", "Α.Φ.Μ.", "Αιτιολογία για καταθέτη",
        "Αιτιολογία προς δικαιούχο", "Κατάσταση συναλλαγής", "Καταχώρηση μέσω",
        "Από Λογαριασμό", "Νόμισμα", "Τρόπος Εκτελέσεως", "Σε λογαριασμό",
        "Δικαιούχος", "Μήνυμα προς δικαιούχο", "ΑΙΤΙΟΛΟΓΙΑ ΑΠΟΣΤΟΛΕΑ",
        "ΑΙΤΙΟΛΟΓΙΑ ΠΑΡΑΛΗΠΤΗ", "ΗΜΕΡΟΜΗΝΙΑ ΚΑΤΑΧΩΡΗΣΗΣ", "ΠΛΗΡΟΦΟΡΙΕΣ",
        "ΧΩΡΑ", "BIC", "ΟΝΟΜΑ ΤΡΑΠΕΖΑΣ", "ΔΙΕΥΘΥΝΣΗ", "ΠΟΛΗ",
        "ΔΙΚΑΙΟΥΧΟΙ ΛΟΓΑΡΙΑΣΜΟΥ", "ΕΝΤΟΛΟΔΟΧΟΣ ΤΡΑΠΕΖΑ", "ΕΝΤΟΛΕΑΣ",
        "ΤΡΟΠΟΣ ΧΡΕΩΣΗΣ ΠΡΟΜΗΘΕΙΩΝ/ΕΞΟΔΩΝ", "ΚΑΤΑΣΤΗΜΑ", "ΚΩΔΙΚΟΣ ΑΝΑΦΟΡΑΣ ΕΝΤΟΛΕΑ",
        "ΛΟΓΑΡΙΑΣΜΟΣ ΓΙΑ ΤΑ ΕΞΟΔΑ ΜΕΤΑΦΟΡΑΣ", "ΤΟΚΟΦΟΡΟΣ ΗΜΕΡΟΜΗΝΙΑ", "Κατάσταση",
        "Κανάλι", "Κύριος Δικαιούχος", "Πληροφορίες για το δικαιούχο", "Εκτέλεση",
        "Ημερομηνία Ενημέρωσης", "Αριθμός Αίτησης", "Κωδικός Συναλλαγής",
        "Χώρα Αποστολής", "Τιμή μετατροπής", "Ημερομηνία Αξίας", "Beneficiary's Bank",
        "Value Date / Amount / Currency", "Details of Payment", "Details of Charges",
        "Ημερομηνία Καταχώρησης", "Έγκριση", "Τράπεζα πληρωμής", "Επωνυμία εντολέα",
        "Λογαριασμός εντολέα", "Λογαριασμός δικαιούχου", "Valeur",
        "Λεπτομέρειες πληρωμής", "Κατάσταση Εμβάσματος",
    ];
}
