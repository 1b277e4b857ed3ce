//! The transaction entry form.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, ERROR_TEXT_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
};

/// The name field.
///
/// With `oob` set, the fragment replaces the input already on the page,
/// which is how the form is cleared after a committed entry.
pub(super) fn name_input(value: &str, oob: bool) -> Markup {
    html! {
        input
            name="name"
            id="transaction-name"
            type="text"
            placeholder="Rent, groceries, pay day..."
            value=(value)
            hx-swap-oob=[oob.then_some("true")]
            class=(FORM_TEXT_INPUT_STYLE);
    }
}

/// The amount field.
pub(super) fn amount_input(value: &str, oob: bool) -> Markup {
    html! {
        input
            name="amount"
            id="transaction-amount"
            type="number"
            step="0.01"
            min="0.01"
            placeholder="0.01"
            value=(value)
            hx-swap-oob=[oob.then_some("true")]
            class=(FORM_TEXT_INPUT_STYLE);
    }
}

/// The entry form with its add and subtract triggers.
///
/// Both buttons post the form fields to their endpoint and swap the
/// response into the inline error slot; the rest of the page is updated
/// by the out-of-band fragments in the response.
pub(super) fn entry_form() -> Markup {
    html! {
        form class="w-full max-w-md mb-8"
        {
            div class="mb-4"
            {
                label for="transaction-name" class=(FORM_LABEL_STYLE) { "Name" }
                (name_input("", false))
            }

            div class="mb-4"
            {
                label for="transaction-amount" class=(FORM_LABEL_STYLE) { "Amount" }
                (amount_input("", false))
            }

            span id="form-error" class=(ERROR_TEXT_STYLE) {}

            div class="flex gap-4 mt-4"
            {
                button
                    type="button"
                    hx-post=(endpoints::ADD_TRANSACTION)
                    hx-target="#form-error"
                    hx-swap="innerHTML"
                    class=(BUTTON_PRIMARY_STYLE)
                {
                    "Add Funds"
                }

                button
                    type="button"
                    hx-post=(endpoints::SUBTRACT_TRANSACTION)
                    hx-target="#form-error"
                    hx-swap="innerHTML"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Subtract Funds"
                }
            }
        }
    }
}
